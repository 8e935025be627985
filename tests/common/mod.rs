//! テスト用のインメモリAPI

#![allow(dead_code)]

use catalog_admin::api::CatalogApi;
use catalog_admin::error::{CatalogError, Result};
use catalog_admin::staging::LocalImage;
use catalog_admin_common::{MultipartPayload, Part, Product, ResetPasswordRequest};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// 送信内容の記録（ファイルはファイル名のみ）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedPayload {
    pub texts: Vec<(String, String)>,
    pub files: Vec<(String, String)>,
}

impl RecordedPayload {
    fn from_payload(payload: MultipartPayload<LocalImage>) -> Self {
        let mut recorded = RecordedPayload::default();
        for part in payload.into_parts() {
            match part {
                Part::Text { name, value } => recorded.texts.push((name, value)),
                Part::File { name, file } => recorded.files.push((name, file.file_name)),
            }
        }
        recorded
    }

    pub fn text(&self, name: &str) -> Vec<&str> {
        self.texts
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has_text(&self, name: &str) -> bool {
        self.texts.iter().any(|(n, _)| n == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetProducts,
    GetProduct(String),
    Post(RecordedPayload),
    Update(String, RecordedPayload),
    Delete(String),
    ResetPassword(String),
}

#[derive(Default)]
pub struct FakeApi {
    pub products: RefCell<Vec<Product>>,
    pub calls: RefCell<Vec<Call>>,
    /// Someのとき全操作をこのメッセージで拒否する
    pub reject_with: RefCell<Option<String>>,
}

impl FakeApi {
    pub fn with_products(products: Vec<Product>) -> Self {
        let api = FakeApi::default();
        *api.products.borrow_mut() = products;
        api
    }

    pub fn reject(&self, message: &str) {
        *self.reject_with.borrow_mut() = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn check(&self) -> Result<()> {
        match self.reject_with.borrow().as_ref() {
            Some(message) => Err(CatalogError::Api { status: 400, message: message.clone() }),
            None => Ok(()),
        }
    }
}

impl CatalogApi for FakeApi {
    async fn get_products(&self) -> Result<Vec<Product>> {
        self.calls.borrow_mut().push(Call::GetProducts);
        self.check()?;
        Ok(self.products.borrow().clone())
    }

    async fn get_product_by_id(&self, id: &str) -> Result<Product> {
        self.calls.borrow_mut().push(Call::GetProduct(id.to_string()));
        self.check()?;
        self.products
            .borrow()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::Api { status: 404, message: "Product not found".into() })
    }

    async fn post_product(&self, payload: MultipartPayload<LocalImage>) -> Result<String> {
        self.calls.borrow_mut().push(Call::Post(RecordedPayload::from_payload(payload)));
        self.check()?;
        Ok("Product added successfully".into())
    }

    async fn update_product(&self, id: &str, payload: MultipartPayload<LocalImage>) -> Result<String> {
        self.calls
            .borrow_mut()
            .push(Call::Update(id.to_string(), RecordedPayload::from_payload(payload)));
        self.check()?;
        Ok("Product updated successfully".into())
    }

    async fn delete_product(&self, id: &str) -> Result<String> {
        self.calls.borrow_mut().push(Call::Delete(id.to_string()));
        self.check()?;
        self.products.borrow_mut().retain(|p| p.id != id);
        Ok("Product deleted".into())
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<String> {
        self.calls
            .borrow_mut()
            .push(Call::ResetPassword(request.new_password.clone()));
        self.check()?;
        Ok("Password updated".into())
    }
}

/// 画像ファイルを作成（中身はダミー）
pub fn write_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"\xff\xd8\xff\xe0dummy").expect("画像作成失敗");
    path
}

pub fn product(id: &str, name: &str, images: &[&str]) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        price: "100".into(),
        description: format!("{} description", name),
        stock: None,
        image: images.iter().map(|s| s.to_string()).collect(),
    }
}
