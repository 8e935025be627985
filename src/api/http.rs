//! reqwest によるAPIクライアント

use super::{CatalogApi, PRODUCTS_PATH, RESET_PASSWORD_PATH};
use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::staging::LocalImage;
use catalog_admin_common::{
    is_segment_id, normalize_base_url, ApiMessage, MultipartPayload, Part, Product, ResetPasswordRequest,
    StatusPolicy,
};
use reqwest::multipart::Form;
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct HttpCatalogApi {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
    policy: StatusPolicy,
}

impl HttpCatalogApi {
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
        policy: StatusPolicy,
    ) -> Result<Self> {
        let base_url = Url::parse(&normalize_base_url(base_url))
            .map_err(|e| CatalogError::Url(format!("{}: {}", base_url, e)))?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url, token, policy })
    }

    /// 設定から生成（`base_url_override` は --base-url 引数）
    pub fn from_config(config: &Config, base_url_override: Option<&str>) -> Result<Self> {
        let base_url = config.resolve_base_url(base_url_override)?;
        Self::new(
            &base_url,
            config.resolve_token(),
            Duration::from_secs(config.timeout_seconds),
            config.status_policy,
        )
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| CatalogError::Url(format!("{}: {}", path, e)))
    }

    /// `products/{id}`（IDは1セグメントとしてエンコード）
    fn product_endpoint(&self, id: &str) -> Result<Url> {
        if !is_segment_id(id) {
            return Err(CatalogError::InvalidArgument(format!("商品IDが不正です: {:?}", id)));
        }
        let mut url = self.endpoint(PRODUCTS_PATH)?;
        url.path_segments_mut()
            .map_err(|_| CatalogError::Url(self.base_url.to_string()))?
            .push(id);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!(status, bytes = body.len(), "APIレスポンス");

        if !self.policy.accepts(status) {
            return Err(CatalogError::Api {
                status,
                message: rejection_message(status, &body),
            });
        }

        // 204など本文なしのレスポンスはメッセージ空として扱う
        let body = if body.trim().is_empty() { "{}" } else { body.as_str() };
        Ok(serde_json::from_str(body)?)
    }

    async fn send_message(&self, request: RequestBuilder) -> Result<String> {
        let reply: ApiMessage = self.send(request).await?;
        Ok(reply.message)
    }
}

impl CatalogApi for HttpCatalogApi {
    async fn get_products(&self) -> Result<Vec<Product>> {
        let url = self.endpoint(PRODUCTS_PATH)?;
        self.send(self.client.get(url)).await
    }

    async fn get_product_by_id(&self, id: &str) -> Result<Product> {
        let url = self.product_endpoint(id)?;
        self.send(self.client.get(url)).await
    }

    async fn post_product(&self, payload: MultipartPayload<LocalImage>) -> Result<String> {
        let url = self.endpoint(PRODUCTS_PATH)?;
        let form = to_form(payload)?;
        self.send_message(self.client.post(url).multipart(form)).await
    }

    async fn update_product(&self, id: &str, payload: MultipartPayload<LocalImage>) -> Result<String> {
        let url = self.product_endpoint(id)?;
        let form = to_form(payload)?;
        self.send_message(self.client.put(url).multipart(form)).await
    }

    async fn delete_product(&self, id: &str) -> Result<String> {
        let url = self.product_endpoint(id)?;
        self.send_message(self.client.delete(url)).await
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<String> {
        let url = self.endpoint(RESET_PASSWORD_PATH)?;
        self.send_message(self.client.post(url).json(request)).await
    }
}

/// 送信内容を reqwest のマルチパートフォームに変換
fn to_form(payload: MultipartPayload<LocalImage>) -> Result<Form> {
    let mut form = Form::new();
    for part in payload.into_parts() {
        form = match part {
            Part::Text { name, value } => form.text(name, value),
            Part::File { name, file } => {
                let file_part = reqwest::multipart::Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.mime_type)?;
                form.part(name, file_part)
            }
        };
    }
    Ok(form)
}

/// 拒否レスポンスの通知文（サーバーのmessage優先）
fn rejection_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiMessage>(body)
        .ok()
        .map(|reply| reply.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| {
            let reason = reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unexpected status");
            format!("{} {}", status, reason)
        })
}
