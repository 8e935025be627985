pub mod header;
pub mod toast;
pub mod image_slot;
pub mod product_form;
pub mod product_list;
pub mod confirm_dialog;
pub mod reset_password;
