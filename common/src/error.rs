//! エラー型定義

use crate::validation::FieldErrors;
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("スロット番号が範囲外です: {index} (スロット数: {len})")]
    SlotOutOfRange { index: usize, len: usize },

    #[error("入力内容に誤りがあります: {0}")]
    Validation(FieldErrors),

    #[error("送信処理中です")]
    SubmitInProgress,

    #[error("送信処理中ではありません")]
    NotSubmitting,

    #[error("プレビューの作成に失敗: {0}")]
    Preview(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Field;

    #[test]
    fn test_error_display_slot_out_of_range() {
        let error = Error::SlotOutOfRange { index: 3, len: 2 };
        let display = format!("{}", error);
        assert!(display.contains('3'));
        assert!(display.contains('2'));
    }

    #[test]
    fn test_error_display_validation() {
        let mut errors = FieldErrors::default();
        errors.insert(Field::Name, "商品名は必須です");
        let display = format!("{}", Error::Validation(errors));
        assert!(display.contains("商品名は必須です"));
    }

    #[test]
    fn test_error_display_preview() {
        let error = Error::Preview("blob unavailable".into());
        assert!(format!("{}", error).contains("blob unavailable"));
    }
}
