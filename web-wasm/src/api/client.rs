//! web-sys fetch によるAPI呼び出し
//!
//! エラーは通知にそのまま表示できる文字列で返す。

use crate::config::{api_base_url, status_policy, TOKEN_KEY};
use catalog_admin_common::{
    is_segment_id, ApiMessage, MultipartPayload, Part, Product, ResetPasswordRequest,
};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

type ApiResult<T> = Result<T, String>;

enum Body {
    Empty,
    Json(String),
    Form(FormData),
}

fn js_message(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "通信エラーが発生しました".to_string())
}

fn stored_token() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(TOKEN_KEY)
        .ok()?
        .filter(|t| !t.trim().is_empty())
}

/// リクエストを送信し、本文をテキストで返す
async fn send(method: &str, path: &str, body: Body) -> ApiResult<String> {
    let url = format!("{}{}", api_base_url(), path);

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    let content_type = match &body {
        Body::Empty => None,
        Body::Json(json) => {
            opts.set_body(&JsValue::from_str(json));
            Some("application/json")
        }
        // multipart の Content-Type はブラウザが境界付きで付与する
        Body::Form(form) => {
            opts.set_body(form);
            None
        }
    };

    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_message)?;
    let headers = request.headers();
    if let Some(content_type) = content_type {
        headers.set("Content-Type", content_type).map_err(js_message)?;
    }
    if let Some(token) = stored_token() {
        headers
            .set("Authorization", &format!("Bearer {}", token))
            .map_err(js_message)?;
    }

    let window = web_sys::window().ok_or("windowが取得できません")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_message)?;
    let resp: Response = resp_value.dyn_into().map_err(js_message)?;

    let text = JsFuture::from(resp.text().map_err(js_message)?)
        .await
        .map_err(js_message)?
        .as_string()
        .unwrap_or_default();

    if !status_policy().accepts(resp.status()) {
        return Err(rejection_message(resp.status(), &resp.status_text(), &text));
    }
    Ok(text)
}

/// 拒否レスポンスの通知文（サーバーのmessage優先）
fn rejection_message(status: u16, status_text: &str, body: &str) -> String {
    serde_json::from_str::<ApiMessage>(body)
        .ok()
        .map(|reply| reply.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("{} {}", status, status_text).trim_end().to_string())
}

fn parse<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    let text = if text.trim().is_empty() { "{}" } else { text };
    serde_json::from_str(text).map_err(|e| format!("レスポンス解析エラー: {}", e))
}

fn to_form_data(payload: MultipartPayload<File>) -> ApiResult<FormData> {
    let form = FormData::new().map_err(js_message)?;
    for part in payload.into_parts() {
        match part {
            Part::Text { name, value } => form.append_with_str(&name, &value),
            Part::File { name, file } => {
                form.append_with_blob_and_filename(&name, &file, &file.name())
            }
        }
        .map_err(js_message)?;
    }
    Ok(form)
}

/// `products/{id}`（IDは1セグメントとしてエンコード）
fn product_path(id: &str) -> ApiResult<String> {
    if !is_segment_id(id) {
        return Err(format!("商品IDが不正です: {:?}", id));
    }
    Ok(format!("products/{}", String::from(js_sys::encode_uri_component(id))))
}

pub async fn get_products() -> ApiResult<Vec<Product>> {
    parse(&send("GET", "products", Body::Empty).await?)
}

pub async fn get_product_by_id(id: &str) -> ApiResult<Product> {
    parse(&send("GET", &product_path(id)?, Body::Empty).await?)
}

pub async fn post_product(payload: MultipartPayload<File>) -> ApiResult<String> {
    let form = to_form_data(payload)?;
    let reply: ApiMessage = parse(&send("POST", "products", Body::Form(form)).await?)?;
    Ok(reply.message)
}

pub async fn update_product(id: &str, payload: MultipartPayload<File>) -> ApiResult<String> {
    let form = to_form_data(payload)?;
    let reply: ApiMessage = parse(&send("PUT", &product_path(id)?, Body::Form(form)).await?)?;
    Ok(reply.message)
}

pub async fn delete_product(id: &str) -> ApiResult<String> {
    let reply: ApiMessage = parse(&send("DELETE", &product_path(id)?, Body::Empty).await?)?;
    Ok(reply.message)
}

pub async fn reset_password(request: &ResetPasswordRequest) -> ApiResult<String> {
    let json = serde_json::to_string(request).map_err(|e| e.to_string())?;
    let reply: ApiMessage = parse(&send("POST", "auth/reset-password", Body::Json(json)).await?)?;
    Ok(reply.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_prefers_server_message() {
        assert_eq!(
            rejection_message(400, "Bad Request", r#"{"message":"Product name already exists"}"#),
            "Product name already exists"
        );
        assert_eq!(rejection_message(404, "Not Found", "<html></html>"), "404 Not Found");
        assert_eq!(rejection_message(502, "", ""), "502");
    }

    #[test]
    fn test_relative_product_id_rejected() {
        assert!(product_path("..").is_err());
        assert!(product_path(" ").is_err());
    }

    #[test]
    fn test_parse_empty_body_as_empty_message() {
        let reply: ApiMessage = parse("").unwrap();
        assert_eq!(reply.message, "");
    }
}
