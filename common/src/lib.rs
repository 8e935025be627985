//! Catalog Admin Common Library
//!
//! CLIとWeb(WASM)で共有される型とフォーム状態

pub mod types;
pub mod error;
pub mod urls;
pub mod status;
pub mod image_ref;
pub mod slots;
pub mod validation;
pub mod payload;
pub mod form;
pub mod listing;
pub mod password;

#[cfg(test)]
mod test_support;

pub use types::{ApiMessage, Product, ResetPasswordRequest, SubmissionResult};
pub use error::{Error, Result};
pub use urls::{image_url, is_segment_id, normalize_base_url};
pub use status::StatusPolicy;
pub use image_ref::{ImageRef, PreviewStore};
pub use slots::{Slot, SlotList};
pub use validation::{Field, FieldErrors};
pub use payload::{MultipartPayload, Part};
pub use form::{AfterSubmit, FormMode, ProductForm, StockMode, SubmitPhase, SubmitReport};
pub use listing::{cover_url, ProductList};
pub use password::PasswordForm;
