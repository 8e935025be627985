use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIのURLが設定されていません。`catalog-admin config --set-base-url URL` で設定してください")]
    MissingBaseUrl,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像形式に対応していません: {0}")]
    UnsupportedImage(String),

    #[error("引数が不正です: {0}")]
    InvalidArgument(String),

    /// サーバーが拒否したリクエスト（メッセージはサーバーのものをそのまま使う）
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("通信エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URLが不正です: {0}")]
    Url(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    /// 通知済みの操作失敗（サーバー・通信のメッセージ）
    #[error("{0}")]
    Failed(String),

    #[error("操作を中止しました")]
    Cancelled,

    #[error(transparent)]
    Common(#[from] catalog_admin_common::Error),
}

impl CatalogError {
    /// 通知に表示するメッセージ
    ///
    /// サーバーの拒否はサーバーのメッセージ、それ以外はエラーの説明文。
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
