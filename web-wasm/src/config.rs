//! ビルド時設定

use catalog_admin_common::{normalize_base_url, StatusPolicy, StockMode};

const DEFAULT_API_URL: &str = "http://localhost:5000/";

/// 認証トークンを保存する localStorage のキー
pub const TOKEN_KEY: &str = "token";

/// APIのベースURL（末尾は必ず `/`）
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("CATALOG_API_URL").unwrap_or(DEFAULT_API_URL))
}

/// 成功とみなすステータス（`CATALOG_STATUS_POLICY=created` で201のみ）
pub fn status_policy() -> StatusPolicy {
    option_env!("CATALOG_STATUS_POLICY")
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

/// 在庫ラベルを扱うか（`CATALOG_TRACK_STOCK=true`）
pub fn stock_mode() -> StockMode {
    match option_env!("CATALOG_TRACK_STOCK") {
        Some("1") | Some("true") => StockMode::PerImage,
        _ => StockMode::Untracked,
    }
}
