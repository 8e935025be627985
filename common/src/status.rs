//! レスポンスの成功判定
//!
//! 旧API契約では全操作が 201 のときだけ成功扱いだった。
//! 既定は 2xx 全体を成功とし、旧契約は `CreatedOnly` で選べる。

use serde::{Deserialize, Serialize};

/// 成功とみなすステータスの方針
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusPolicy {
    /// 200-299 を成功とする
    #[default]
    AnySuccess,
    /// 201 のみ成功とする
    CreatedOnly,
}

impl StatusPolicy {
    pub fn accepts(&self, status: u16) -> bool {
        match self {
            StatusPolicy::AnySuccess => (200..300).contains(&status),
            StatusPolicy::CreatedOnly => status == 201,
        }
    }
}

impl std::str::FromStr for StatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "any" | "any-success" | "2xx" => Ok(StatusPolicy::AnySuccess),
            "created" | "created-only" | "201" => Ok(StatusPolicy::CreatedOnly),
            _ => Err(format!("Unknown status policy: {}. Use any or created", s)),
        }
    }
}

impl std::fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusPolicy::AnySuccess => write!(f, "any"),
            StatusPolicy::CreatedOnly => write!(f, "created"),
        }
    }
}
