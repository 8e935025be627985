use crate::error::{CatalogError, Result};
use catalog_admin_common::{normalize_base_url, StatusPolicy, StockMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const BASE_URL_ENV: &str = "CATALOG_ADMIN_BASE_URL";
pub const TOKEN_ENV: &str = "CATALOG_ADMIN_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// APIのベースURL（画像URLの組み立てにも使う）
    pub base_url: String,
    pub auth_token: Option<String>,
    pub timeout_seconds: u64,
    pub status_policy: StatusPolicy,
    /// 画像ごとの在庫ラベルを扱う
    pub stock_tracking: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/".into(),
            auth_token: None,
            timeout_seconds: 30,
            status_policy: StatusPolicy::default(),
            stock_tracking: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CatalogError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("catalog-admin").join("config.json"))
    }

    /// 接続先URL（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> Result<String> {
        let env_value = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());
        let chosen = cli_override
            .map(str::to_string)
            .or(env_value)
            .unwrap_or_else(|| self.base_url.clone());

        if chosen.trim().is_empty() {
            return Err(CatalogError::MissingBaseUrl);
        }
        Ok(normalize_base_url(&chosen))
    }

    /// 認証トークン（環境変数を優先）
    pub fn resolve_token(&self) -> Option<String> {
        std::env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.auth_token.clone())
    }

    pub fn stock_mode(&self) -> StockMode {
        if self.stock_tracking {
            StockMode::PerImage
        } else {
            StockMode::Untracked
        }
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        if url.trim().is_empty() {
            return Err(CatalogError::MissingBaseUrl);
        }
        self.base_url = normalize_base_url(&url);
        Ok(())
    }
}
