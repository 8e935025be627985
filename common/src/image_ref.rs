//! 画像スロットの中身
//!
//! `F` はプラットフォームごとのファイルハンドル
//! （CLIはローカル画像、Webは `web_sys::File`）。

use crate::error::Result;

/// 1スロット分の画像参照
#[derive(Debug, Clone, PartialEq)]
pub enum ImageRef<F> {
    /// ファイル未選択
    Empty,
    /// サーバー上の既存画像（変更不可）
    Hosted { url: String },
    /// 未アップロードのローカル画像
    Staged { preview_url: String, file: F },
}

impl<F> ImageRef<F> {
    /// 表示用URL（未選択ならNone）
    pub fn display_url(&self) -> Option<&str> {
        match self {
            ImageRef::Empty => None,
            ImageRef::Hosted { url } => Some(url),
            ImageRef::Staged { preview_url, .. } => Some(preview_url),
        }
    }

    /// 送信対象のファイル
    pub fn staged_file(&self) -> Option<&F> {
        match self {
            ImageRef::Staged { file, .. } => Some(file),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ImageRef::Empty)
    }

    pub fn is_staged(&self) -> bool {
        matches!(self, ImageRef::Staged { .. })
    }
}

impl<F> Default for ImageRef<F> {
    fn default() -> Self {
        ImageRef::Empty
    }
}

/// プレビューURLの確保と解放
///
/// ステージした画像を即時表示するためのURLを払い出す。
/// 払い出したURLは差し替え・削除・リセット時に必ず `release` される。
pub trait PreviewStore<F> {
    fn acquire(&mut self, file: &F) -> Result<String>;
    fn release(&mut self, url: &str);
}
