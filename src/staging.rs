//! ローカル画像のステージング
//!
//! 送信前の画像をメモリに読み込み、プレビューURL（file://）を払い出す。

use crate::error::{CatalogError, Result};
use catalog_admin_common::PreviewStore;
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// 送信待ちのローカル画像
#[derive(Debug, Clone, PartialEq)]
pub struct LocalImage {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl LocalImage {
    /// 画像ファイルを読み込む
    ///
    /// 存在しないファイル、画像形式でない拡張子はエラー。
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CatalogError::FileNotFound(path.display().to_string()));
        }

        let format = ImageFormat::from_path(path)
            .map_err(|_| CatalogError::UnsupportedImage(path.display().to_string()))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let bytes = std::fs::read(path)?;

        tracing::debug!(file = %file_name, size = bytes.len(), "画像をステージ");
        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            mime_type: format.to_mime_type().to_string(),
            bytes,
        })
    }
}

/// file:// URLのプレビュー管理
#[derive(Debug, Default)]
pub struct FilePreviews {
    active: Vec<String>,
}

impl FilePreviews {
    pub fn new() -> Self {
        Self::default()
    }

    /// 解放されていないプレビュー数
    pub fn active(&self) -> usize {
        self.active.len()
    }
}

impl PreviewStore<LocalImage> for FilePreviews {
    fn acquire(&mut self, file: &LocalImage) -> catalog_admin_common::Result<String> {
        let absolute = file.path.canonicalize().unwrap_or_else(|_| file.path.clone());
        let url = format!("file://{}", absolute.display());
        self.active.push(url.clone());
        Ok(url)
    }

    fn release(&mut self, url: &str) {
        if let Some(pos) = self.active.iter().position(|u| u == url) {
            self.active.swap_remove(pos);
        }
    }
}
