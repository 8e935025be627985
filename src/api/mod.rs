//! カタログAPI
//!
//! 商品と認証のエンドポイントを呼び出す。成功判定は `StatusPolicy` に従い、
//! 拒否されたリクエストはサーバーのメッセージ付きで `CatalogError::Api` になる。

mod http;

pub use http::HttpCatalogApi;

use crate::error::Result;
use crate::staging::LocalImage;
use catalog_admin_common::{MultipartPayload, Product, ResetPasswordRequest};

/// エンドポイント（ベースURLからの相対パス）
pub const PRODUCTS_PATH: &str = "products";
pub const RESET_PASSWORD_PATH: &str = "auth/reset-password";

/// カタログAPIの操作
///
/// 作成・更新・削除・パスワード変更はサーバーのメッセージを返す。
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    async fn get_products(&self) -> Result<Vec<Product>>;

    async fn get_product_by_id(&self, id: &str) -> Result<Product>;

    async fn post_product(&self, payload: MultipartPayload<LocalImage>) -> Result<String>;

    async fn update_product(&self, id: &str, payload: MultipartPayload<LocalImage>) -> Result<String>;

    async fn delete_product(&self, id: &str) -> Result<String>;

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<String>;
}
