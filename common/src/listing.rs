//! 商品一覧の状態
//!
//! 一覧の読み込み、削除確認、並べ替えを扱う。
//! 並べ替えは表示上のみ（APIに並び順の保存先がない）。

use crate::error::{Error, Result};
use crate::types::{Product, SubmissionResult};
use crate::urls::image_url;

/// 削除成功時の通知文
pub const DELETED_MESSAGE: &str = "商品を削除しました";

/// 商品一覧
#[derive(Debug, Clone, Default)]
pub struct ProductList {
    items: Vec<Product>,
    loading: bool,
    pending_delete: Option<String>,
}

impl ProductList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn loaded(&mut self, items: Vec<Product>) {
        tracing::debug!(count = items.len(), "商品一覧を読み込み");
        self.items = items;
        self.loading = false;
    }

    /// 読み込み失敗（一覧は空のまま）
    pub fn load_failed(&mut self, message: impl Into<String>) -> SubmissionResult {
        self.loading = false;
        SubmissionResult::failure(message)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|p| p.id == id)
    }

    /// 削除確認を開く（一覧にないIDならfalse）
    pub fn request_delete(&mut self, id: &str) -> bool {
        if self.position(id).is_none() {
            return false;
        }
        self.pending_delete = Some(id.to_string());
        true
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// 削除結果を反映
    ///
    /// 成功時は該当IDだけを取り除き確認を閉じる。失敗時は確認を開いたままにする。
    pub fn finish_delete(
        &mut self,
        id: &str,
        outcome: std::result::Result<String, String>,
    ) -> SubmissionResult {
        match outcome {
            Ok(_) => {
                self.items.retain(|p| p.id != id);
                if self.pending_delete.as_deref() == Some(id) {
                    self.pending_delete = None;
                }
                SubmissionResult::success(DELETED_MESSAGE)
            }
            Err(message) => {
                tracing::warn!(%id, %message, "商品の削除に失敗");
                SubmissionResult::failure(message)
            }
        }
    }

    /// 並べ替え（`from` の商品を `to` の位置へ移動）
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.items.len();
        if from >= len {
            return Err(Error::SlotOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(Error::SlotOutOfRange { index: to, len });
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        Ok(())
    }

    /// ID指定の並べ替え（ドラッグ&ドロップ用）
    pub fn reorder_by_id(&mut self, from_id: &str, to_id: &str) -> bool {
        match (self.position(from_id), self.position(to_id)) {
            (Some(from), Some(to)) => self.reorder(from, to).is_ok(),
            _ => false,
        }
    }
}

/// 一覧に表示する代表画像のURL
pub fn cover_url(product: &Product, base_url: &str) -> Option<String> {
    product.image.first().map(|file| image_url(base_url, file))
}
