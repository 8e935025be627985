//! APIとやり取りする型の定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Product: サーバー上の商品レコード
//! - ApiMessage: 作成/更新/削除/パスワード変更のレスポンス
//! - SubmissionResult: 操作ごとの通知内容

use serde::{Deserialize, Deserializer, Serialize};

/// 商品レコード（サーバー形式）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// 価格（数値・文字列どちらで返っても文字列に揃える）
    #[serde(default, deserialize_with = "string_or_number")]
    pub price: String,

    #[serde(default)]
    pub description: String,

    /// 画像ごとの在庫ラベル（在庫管理あり画面のみ）
    #[serde(default, deserialize_with = "optional_string_list")]
    pub stock: Option<Vec<String>>,

    /// アップロード済み画像のファイル名
    #[serde(default)]
    pub image: Vec<String>,
}

/// メッセージのみのレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

/// パスワード再設定リクエスト
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

/// 操作結果の通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub succeeded: bool,
    pub message: String,
}

impl SubmissionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self { succeeded: true, message: message.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { succeeded: false, message: message.into() }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Scalar> = Option::deserialize(deserializer)?;
    Ok(value.map(Scalar::into_string).unwrap_or_default())
}

fn optional_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Option<Vec<Option<Scalar>>> = Option::deserialize(deserializer)?;
    Ok(values.map(|list| {
        list.into_iter()
            .map(|v| v.map(Scalar::into_string).unwrap_or_default())
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserialize_numeric_price() {
        let json = r#"{
            "_id": "65a1",
            "name": "Chair",
            "price": 499,
            "description": "Oak chair",
            "image": ["a.jpg", "b.jpg"]
        }"#;

        let product: Product = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(product.id, "65a1");
        assert_eq!(product.price, "499");
        assert_eq!(product.image, vec!["a.jpg", "b.jpg"]);
        assert_eq!(product.stock, None);
    }

    #[test]
    fn test_product_deserialize_mixed_stock() {
        let json = r#"{"_id": "1", "price": "12.5", "stock": ["3", 7, null], "image": []}"#;

        let product: Product = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(product.price, "12.5");
        assert_eq!(
            product.stock,
            Some(vec!["3".to_string(), "7".to_string(), String::new()])
        );
    }

    #[test]
    fn test_product_deserialize_missing_fields() {
        let product: Product = serde_json::from_str(r#"{"_id": "x"}"#).expect("デシリアライズ失敗");
        assert_eq!(product.name, "");
        assert_eq!(product.price, "");
        assert!(product.image.is_empty());
    }

    #[test]
    fn test_reset_password_request_camel_case() {
        let request = ResetPasswordRequest { new_password: "Secr3t!pw".to_string() };
        let json = serde_json::to_string(&request).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"newPassword":"Secr3t!pw"}"#);
    }
}
