//! 画像・在庫スロットの管理
//!
//! 画像と在庫ラベルを1つのスロットにまとめて保持するため、
//! 画像数と在庫ラベル数は常に一致する。
//! ステージ画像のプレビューURLは差し替え・削除・クリア・破棄のときに解放する。

use crate::error::{Error, Result};
use crate::image_ref::{ImageRef, PreviewStore};

/// 1スロット（画像 + 在庫ラベル）
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<F> {
    pub image: ImageRef<F>,
    pub stock: String,
}

impl<F> Slot<F> {
    fn empty() -> Self {
        Self { image: ImageRef::Empty, stock: String::new() }
    }
}

/// スロット列
pub struct SlotList<F, P: PreviewStore<F>> {
    slots: Vec<Slot<F>>,
    previews: P,
}

impl<F, P: PreviewStore<F>> SlotList<F, P> {
    pub fn new(previews: P) -> Self {
        Self { slots: Vec::new(), previews }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slot<F>> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot<F>> {
        self.slots.iter()
    }

    /// 画像列
    pub fn images(&self) -> Vec<&ImageRef<F>> {
        self.slots.iter().map(|s| &s.image).collect()
    }

    /// 在庫ラベル列
    pub fn stock_labels(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.stock.as_str()).collect()
    }

    /// ステージ済み画像の枚数
    pub fn staged_count(&self) -> usize {
        self.slots.iter().filter(|s| s.image.is_staged()).count()
    }

    pub fn previews(&self) -> &P {
        &self.previews
    }

    /// 空スロットを末尾に追加
    pub fn append(&mut self) {
        self.slots.push(Slot::empty());
    }

    /// 既存画像のスロットを追加（編集画面の初期化用）
    pub fn push_hosted(&mut self, url: impl Into<String>, stock: impl Into<String>) {
        self.slots.push(Slot {
            image: ImageRef::Hosted { url: url.into() },
            stock: stock.into(),
        });
    }

    /// 指定スロットを削除
    pub fn remove_at(&mut self, index: usize) -> Result<Slot<F>> {
        self.check_index(index)?;
        let slot = self.slots.remove(index);
        if let ImageRef::Staged { preview_url, .. } = &slot.image {
            self.previews.release(preview_url);
        }
        tracing::debug!(index, remaining = self.slots.len(), "スロット削除");
        Ok(slot)
    }

    /// 指定スロットの画像をステージ画像に差し替える
    pub fn set_image_at(&mut self, index: usize, file: F) -> Result<()> {
        self.check_index(index)?;
        let preview_url = self.previews.acquire(&file)?;
        let previous = std::mem::replace(
            &mut self.slots[index].image,
            ImageRef::Staged { preview_url, file },
        );
        if let ImageRef::Staged { preview_url, .. } = previous {
            self.previews.release(&preview_url);
        }
        Ok(())
    }

    /// 指定スロットの在庫ラベルを設定（文字列化して保持）
    pub fn set_stock_at(&mut self, index: usize, value: impl ToString) -> Result<()> {
        self.check_index(index)?;
        self.slots[index].stock = value.to_string();
        Ok(())
    }

    /// 全スロットを破棄
    pub fn clear(&mut self) {
        for slot in self.slots.drain(..) {
            if let ImageRef::Staged { preview_url, .. } = &slot.image {
                self.previews.release(preview_url);
            }
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(Error::SlotOutOfRange { index, len: self.slots.len() })
        }
    }
}

impl<F, P: PreviewStore<F>> Drop for SlotList<F, P> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<F: std::fmt::Debug, P: PreviewStore<F>> std::fmt::Debug for SlotList<F, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotList").field("slots", &self.slots).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CountingPreviews, TestFile};

    fn list() -> (SlotList<TestFile, CountingPreviews>, CountingPreviews) {
        let previews = CountingPreviews::default();
        (SlotList::new(previews.clone()), previews)
    }

    fn assert_aligned(slots: &SlotList<TestFile, CountingPreviews>) {
        assert_eq!(slots.images().len(), slots.stock_labels().len());
        assert_eq!(slots.images().len(), slots.len());
    }

    #[test]
    fn test_append_adds_empty_slot() {
        let (mut slots, _) = list();
        slots.append();
        slots.append();

        assert_eq!(slots.len(), 2);
        assert!(slots.images().iter().all(|img| img.is_empty()));
        assert_eq!(slots.stock_labels(), vec!["", ""]);
    }

    #[test]
    fn test_alignment_holds_for_mixed_operations() {
        let (mut slots, _) = list();
        let ops: &[(bool, usize)] = &[
            (true, 0), (true, 0), (true, 0), (false, 1), (true, 0),
            (false, 0), (false, 1), (true, 0), (false, 0), (false, 0),
        ];
        for &(append, index) in ops {
            if append {
                slots.append();
            } else {
                let _ = slots.remove_at(index);
            }
            assert_aligned(&slots);
        }
        assert!(slots.is_empty());
    }

    #[test]
    fn test_append_then_remove_restores_state() {
        let (mut slots, _) = list();
        slots.push_hosted("http://x/uploads/a.jpg", "3");
        slots.append();
        slots.set_stock_at(1, "5").unwrap();

        let before_images: Vec<Option<String>> =
            slots.images().iter().map(|i| i.display_url().map(String::from)).collect();
        let before_stock: Vec<String> =
            slots.stock_labels().iter().map(|s| s.to_string()).collect();

        slots.append();
        let appended = slots.len() - 1;
        slots.remove_at(appended).unwrap();

        let after_images: Vec<Option<String>> =
            slots.images().iter().map(|i| i.display_url().map(String::from)).collect();
        let after_stock: Vec<String> =
            slots.stock_labels().iter().map(|s| s.to_string()).collect();
        assert_eq!(before_images, after_images);
        assert_eq!(before_stock, after_stock);
    }

    #[test]
    fn test_remove_out_of_range_fails_without_change() {
        let (mut slots, _) = list();
        slots.append();

        let err = slots.remove_at(1).unwrap_err();
        assert!(matches!(err, Error::SlotOutOfRange { index: 1, len: 1 }));
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn test_set_image_and_stock_out_of_range() {
        let (mut slots, previews) = list();
        assert!(slots.set_image_at(0, TestFile("a.jpg")).is_err());
        assert!(slots.set_stock_at(0, 1).is_err());
        // 範囲外ではプレビューを確保しない
        assert_eq!(previews.acquired(), 0);
    }

    #[test]
    fn test_set_stock_coerces_to_string() {
        let (mut slots, _) = list();
        slots.append();
        slots.set_stock_at(0, 42).unwrap();
        assert_eq!(slots.stock_labels(), vec!["42"]);
    }

    #[test]
    fn test_set_image_replaces_and_releases_previous_preview() {
        let (mut slots, previews) = list();
        slots.append();
        slots.set_image_at(0, TestFile("a.jpg")).unwrap();
        let first = slots.get(0).unwrap().image.display_url().unwrap().to_string();

        slots.set_image_at(0, TestFile("b.jpg")).unwrap();

        assert_eq!(previews.active(), 1);
        assert!(previews.released_urls().contains(&first));
        assert_eq!(
            slots.get(0).unwrap().image.staged_file(),
            Some(&TestFile("b.jpg"))
        );
    }

    #[test]
    fn test_remove_releases_preview() {
        let (mut slots, previews) = list();
        slots.append();
        slots.set_image_at(0, TestFile("a.jpg")).unwrap();
        assert_eq!(previews.active(), 1);

        slots.remove_at(0).unwrap();
        assert_eq!(previews.active(), 0);
    }

    #[test]
    fn test_clear_and_drop_release_all_previews() {
        let (mut slots, previews) = list();
        for name in ["a.jpg", "b.jpg", "c.jpg"] {
            slots.append();
            let last = slots.len() - 1;
            slots.set_image_at(last, TestFile(name)).unwrap();
        }
        assert_eq!(previews.active(), 3);

        slots.clear();
        assert_eq!(previews.active(), 0);
        assert!(slots.is_empty());

        slots.append();
        slots.set_image_at(0, TestFile("d.jpg")).unwrap();
        drop(slots);
        assert_eq!(previews.active(), 0);
    }

    #[test]
    fn test_hosted_image_replaced_by_staged() {
        let (mut slots, previews) = list();
        slots.push_hosted("http://x/uploads/old.jpg", "");
        slots.set_image_at(0, TestFile("new.jpg")).unwrap();

        assert_eq!(slots.staged_count(), 1);
        assert_eq!(previews.active(), 1);
        assert!(previews.released_urls().is_empty());
    }
}
