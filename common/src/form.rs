//! 商品フォーム
//!
//! 下書き（基本項目 + スロット列）と送信状態を管理する。
//!
//! 送信状態の遷移:
//! - Idle → Submitting: 入力チェックに通ったとき（`begin_submit`）
//! - Submitting → Succeeded: サーバーが受理（下書きをリセット）
//! - Submitting → Failed: サーバーが拒否、または通信失敗（下書きは保持）
//! - Succeeded / Failed → Idle: 通知表示後（`acknowledge`）

use crate::error::{Error, Result};
use crate::image_ref::{ImageRef, PreviewStore};
use crate::payload::{
    MultipartPayload, FIELD_DESCRIPTION, FIELD_IMAGES, FIELD_NAME, FIELD_PRICE, FIELD_STOCK,
};
use crate::slots::SlotList;
use crate::types::{Product, SubmissionResult};
use crate::urls::image_url;
use crate::validation::{validate_product, FieldErrors};

/// 新規作成か既存商品の編集か
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// 画像ごとの在庫ラベルを扱うか
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StockMode {
    #[default]
    Untracked,
    PerImage,
}

/// 送信状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

/// 送信後の画面遷移
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSubmit {
    Stay,
    GoToCreate,
}

/// 送信結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReport {
    pub result: SubmissionResult,
    pub next: AfterSubmit,
}

/// 商品フォーム
pub struct ProductForm<F, P: PreviewStore<F>> {
    mode: FormMode,
    stock_mode: StockMode,
    name: String,
    price: String,
    description: String,
    slots: SlotList<F, P>,
    phase: SubmitPhase,
    errors: FieldErrors,
}

impl<F, P: PreviewStore<F>> ProductForm<F, P> {
    pub fn new(mode: FormMode, stock_mode: StockMode, previews: P) -> Self {
        Self {
            mode,
            stock_mode,
            name: String::new(),
            price: String::new(),
            description: String::new(),
            slots: SlotList::new(previews),
            phase: SubmitPhase::Idle,
            errors: FieldErrors::default(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn stock_mode(&self) -> StockMode {
        self.stock_mode
    }

    /// 編集対象のID
    pub fn edit_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Edit { id } => Some(id),
            FormMode::Create => None,
        }
    }

    /// スロットの追加・削除ができるか（新規作成時のみ）
    pub fn slots_editable(&self) -> bool {
        self.mode == FormMode::Create
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_price(&mut self, value: impl Into<String>) {
        self.price = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn slots(&self) -> &SlotList<F, P> {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut SlotList<F, P> {
        &mut self.slots
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    /// 送信中（送信ボタンを無効化する）
    pub fn is_busy(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// 入力チェックのみ実行（エラー表示を更新）
    pub fn validate(&mut self) -> bool {
        self.errors = validate_product(
            &self.name,
            &self.price,
            &self.description,
            self.slots.staged_count(),
            self.mode == FormMode::Create,
        );
        self.errors.is_empty()
    }

    /// 下書きを空に戻す
    pub fn reset(&mut self) {
        self.name.clear();
        self.price.clear();
        self.description.clear();
        self.slots.clear();
        self.errors = FieldErrors::default();
    }

    /// 既存商品の内容で下書きを初期化
    pub fn seed(&mut self, product: &Product, base_url: &str) {
        self.reset();
        self.name = product.name.clone();
        self.price = product.price.clone();
        self.description = product.description.clone();

        let stock: &[String] = match (self.stock_mode, &product.stock) {
            (StockMode::PerImage, Some(stock)) => stock,
            _ => &[],
        };
        if stock.len() > product.image.len() {
            tracing::warn!(
                images = product.image.len(),
                stock = stock.len(),
                "在庫ラベルが画像数を超えています。超過分は無視します"
            );
        }

        for (index, file_name) in product.image.iter().enumerate() {
            let label = stock.get(index).cloned().unwrap_or_default();
            self.slots.push_hosted(image_url(base_url, file_name), label);
        }
        tracing::debug!(id = %product.id, slots = self.slots.len(), "下書きを初期化");
    }

    /// 読み込み失敗時の通知（下書きは空のまま）
    pub fn load_failed(&mut self, message: impl Into<String>) -> SubmissionResult {
        self.reset();
        SubmissionResult::failure(message)
    }

    /// 送信開始
    ///
    /// 入力チェックに失敗した場合は Idle のまま項目エラーを返す。
    pub fn begin_submit(&mut self) -> Result<MultipartPayload<F>>
    where
        F: Clone,
    {
        if self.phase != SubmitPhase::Idle {
            return Err(Error::SubmitInProgress);
        }
        if !self.validate() {
            return Err(Error::Validation(self.errors.clone()));
        }
        self.phase = SubmitPhase::Submitting;
        Ok(self.build_payload())
    }

    /// 送信結果を反映
    ///
    /// `outcome` はサーバーのメッセージ（受理）またはエラーメッセージ（拒否・通信失敗）。
    pub fn finish_submit(
        &mut self,
        outcome: std::result::Result<String, String>,
    ) -> Result<SubmitReport> {
        if self.phase != SubmitPhase::Submitting {
            return Err(Error::NotSubmitting);
        }

        let report = match outcome {
            Ok(message) => {
                self.reset();
                let next = if self.edit_id().is_some() {
                    self.mode = FormMode::Create;
                    AfterSubmit::GoToCreate
                } else {
                    AfterSubmit::Stay
                };
                self.phase = SubmitPhase::Succeeded(message.clone());
                SubmitReport { result: SubmissionResult::success(message), next }
            }
            Err(message) => {
                tracing::warn!(%message, "商品の送信に失敗");
                self.phase = SubmitPhase::Failed(message.clone());
                SubmitReport {
                    result: SubmissionResult::failure(message),
                    next: AfterSubmit::Stay,
                }
            }
        };
        Ok(report)
    }

    /// 通知表示後に Idle へ戻す
    pub fn acknowledge(&mut self) {
        if matches!(self.phase, SubmitPhase::Succeeded(_) | SubmitPhase::Failed(_)) {
            self.phase = SubmitPhase::Idle;
        }
    }

    fn build_payload(&self) -> MultipartPayload<F>
    where
        F: Clone,
    {
        let mut payload = MultipartPayload::new();
        payload.text(FIELD_NAME, self.name.as_str());
        payload.text(FIELD_PRICE, self.price.as_str());
        payload.text(FIELD_DESCRIPTION, self.description.as_str());

        if self.stock_mode == StockMode::PerImage {
            for slot in self.slots.iter() {
                payload.text(FIELD_STOCK, slot.stock.as_str());
            }
        }

        for slot in self.slots.iter() {
            if let ImageRef::Staged { file, .. } = &slot.image {
                payload.file(FIELD_IMAGES, file.clone());
            }
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CountingPreviews, TestFile};
    use crate::validation::Field;

    type Form = ProductForm<TestFile, CountingPreviews>;

    fn create_form(stock_mode: StockMode) -> (Form, CountingPreviews) {
        let previews = CountingPreviews::default();
        (ProductForm::new(FormMode::Create, stock_mode, previews.clone()), previews)
    }

    fn fill_chair(form: &mut Form) {
        form.set_name("Chair");
        form.set_price("499");
        form.set_description("Oak chair");
        form.slots_mut().append();
        form.slots_mut().set_image_at(0, TestFile("chair.jpg")).unwrap();
    }

    fn product(images: &[&str], stock: Option<&[&str]>) -> Product {
        Product {
            id: "p1".into(),
            name: "Table".into(),
            price: "1200".into(),
            description: "Walnut table".into(),
            stock: stock.map(|s| s.iter().map(|v| v.to_string()).collect()),
            image: images.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn test_chair_payload_without_stock() {
        let (mut form, _) = create_form(StockMode::Untracked);
        fill_chair(&mut form);

        let payload = form.begin_submit().expect("送信開始に失敗");
        assert_eq!(payload.text_values(FIELD_NAME), vec!["Chair"]);
        assert_eq!(payload.text_values(FIELD_PRICE), vec!["499"]);
        assert_eq!(payload.text_values(FIELD_DESCRIPTION), vec!["Oak chair"]);
        assert_eq!(payload.files(FIELD_IMAGES), vec![&TestFile("chair.jpg")]);
        assert!(!payload.contains(FIELD_STOCK));
        assert!(form.is_busy());
    }

    #[test]
    fn test_stock_sent_per_slot_when_tracked() {
        let (mut form, _) = create_form(StockMode::PerImage);
        fill_chair(&mut form);
        form.slots_mut().set_stock_at(0, 4).unwrap();
        form.slots_mut().append();
        form.slots_mut().set_stock_at(1, "9").unwrap();

        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.text_values(FIELD_STOCK), vec!["4", "9"]);
        // 空スロットの画像は送らない
        assert_eq!(payload.files(FIELD_IMAGES).len(), 1);
    }

    #[test]
    fn test_validation_blocks_submit() {
        let (mut form, _) = create_form(StockMode::Untracked);
        form.set_price("abc");

        let err = form.begin_submit().unwrap_err();
        match err {
            Error::Validation(errors) => {
                assert!(errors.contains(Field::Name));
                assert!(errors.contains(Field::Price));
                assert!(errors.contains(Field::Description));
                assert!(errors.contains(Field::Images));
            }
            other => panic!("想定外のエラー: {:?}", other),
        }
        assert_eq!(form.phase(), &SubmitPhase::Idle);
        assert!(!form.field_errors().is_empty());
    }

    #[test]
    fn test_double_submit_rejected() {
        let (mut form, _) = create_form(StockMode::Untracked);
        fill_chair(&mut form);
        form.begin_submit().unwrap();
        assert!(matches!(form.begin_submit(), Err(Error::SubmitInProgress)));
    }

    #[test]
    fn test_create_success_resets_draft() {
        let (mut form, previews) = create_form(StockMode::PerImage);
        fill_chair(&mut form);
        form.begin_submit().unwrap();

        let report = form.finish_submit(Ok("Product added".into())).unwrap();
        assert_eq!(report.result, SubmissionResult::success("Product added"));
        assert_eq!(report.next, AfterSubmit::Stay);
        assert_eq!(form.name(), "");
        assert_eq!(form.price(), "");
        assert_eq!(form.description(), "");
        assert!(form.slots().is_empty());
        assert_eq!(previews.active(), 0);

        form.acknowledge();
        assert_eq!(form.phase(), &SubmitPhase::Idle);
    }

    #[test]
    fn test_update_success_goes_to_create() {
        let previews = CountingPreviews::default();
        let mut form: Form =
            ProductForm::new(FormMode::Edit { id: "p1".into() }, StockMode::Untracked, previews);
        form.seed(&product(&["a.jpg"], None), "http://localhost:5000/");
        form.begin_submit().expect("編集時は画像なしでも送信できる");

        let report = form.finish_submit(Ok("Product updated".into())).unwrap();
        assert_eq!(report.next, AfterSubmit::GoToCreate);
        assert_eq!(form.mode(), &FormMode::Create);
        assert!(form.slots().is_empty());
        assert_eq!(form.name(), "");
    }

    #[test]
    fn test_failure_preserves_draft() {
        let (mut form, previews) = create_form(StockMode::Untracked);
        fill_chair(&mut form);
        form.begin_submit().unwrap();

        let report = form.finish_submit(Err("Name already exists".into())).unwrap();
        assert!(!report.result.succeeded);
        assert_eq!(report.result.message, "Name already exists");
        assert_eq!(form.phase(), &SubmitPhase::Failed("Name already exists".into()));
        assert_eq!(form.name(), "Chair");
        assert_eq!(form.slots().len(), 1);
        assert_eq!(previews.active(), 1);

        form.acknowledge();
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_finish_without_submit_is_error() {
        let (mut form, _) = create_form(StockMode::Untracked);
        assert!(matches!(form.finish_submit(Ok(String::new())), Err(Error::NotSubmitting)));
    }

    #[test]
    fn test_seed_maps_images_and_stock() {
        let previews = CountingPreviews::default();
        let mut form: Form =
            ProductForm::new(FormMode::Edit { id: "p1".into() }, StockMode::PerImage, previews);
        form.seed(&product(&["a.jpg", "b.jpg"], Some(&["3"])), "http://localhost:5000");

        assert_eq!(form.name(), "Table");
        assert_eq!(form.price(), "1200");
        let urls: Vec<Option<&str>> =
            form.slots().images().iter().map(|i| i.display_url()).collect();
        assert_eq!(
            urls,
            vec![
                Some("http://localhost:5000/uploads/a.jpg"),
                Some("http://localhost:5000/uploads/b.jpg"),
            ]
        );
        assert_eq!(form.slots().stock_labels(), vec!["3", ""]);
        assert!(!form.slots_editable());
    }

    #[test]
    fn test_seed_ignores_stock_when_untracked() {
        let previews = CountingPreviews::default();
        let mut form: Form =
            ProductForm::new(FormMode::Edit { id: "p1".into() }, StockMode::Untracked, previews);
        form.seed(&product(&["a.jpg"], Some(&["5", "6"])), "http://x/");
        assert_eq!(form.slots().stock_labels(), vec![""]);
    }

    #[test]
    fn test_hosted_images_not_resent() {
        let previews = CountingPreviews::default();
        let mut form: Form =
            ProductForm::new(FormMode::Edit { id: "p1".into() }, StockMode::PerImage, previews);
        form.seed(&product(&["a.jpg", "b.jpg"], Some(&["1", "2"])), "http://x/");
        form.slots_mut().set_image_at(1, TestFile("b2.jpg")).unwrap();

        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.files(FIELD_IMAGES), vec![&TestFile("b2.jpg")]);
        assert_eq!(payload.text_values(FIELD_STOCK), vec!["1", "2"]);
    }

    #[test]
    fn test_load_failed_leaves_empty_draft() {
        let (mut form, _) = create_form(StockMode::Untracked);
        form.set_name("stale");
        let result = form.load_failed("Network Error");
        assert_eq!(result, SubmissionResult::failure("Network Error"));
        assert_eq!(form.name(), "");
        assert!(form.slots().is_empty());
    }
}
