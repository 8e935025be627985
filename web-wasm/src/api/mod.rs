//! カタログAPI（fetch）

mod client;

pub use client::{
    delete_product, get_product_by_id, get_products, post_product, reset_password,
    update_product,
};
