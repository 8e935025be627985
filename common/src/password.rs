//! パスワード再設定フォーム

use crate::error::{Error, Result};
use crate::form::SubmitPhase;
use crate::types::{ResetPasswordRequest, SubmissionResult};
use crate::validation::{validate_password, FieldErrors};

#[derive(Debug, Clone, Default)]
pub struct PasswordForm {
    pub password: String,
    pub confirm_password: String,
    show_password: bool,
    phase: SubmitPhase,
    errors: FieldErrors,
}

impl PasswordForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    /// 表示/非表示の切り替え（2つの入力欄で共通）
    pub fn toggle_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn begin_submit(&mut self) -> Result<ResetPasswordRequest> {
        if self.phase != SubmitPhase::Idle {
            return Err(Error::SubmitInProgress);
        }
        self.errors = validate_password(&self.password, &self.confirm_password);
        if !self.errors.is_empty() {
            return Err(Error::Validation(self.errors.clone()));
        }
        self.phase = SubmitPhase::Submitting;
        Ok(ResetPasswordRequest { new_password: self.password.clone() })
    }

    pub fn finish_submit(
        &mut self,
        outcome: std::result::Result<String, String>,
    ) -> Result<SubmissionResult> {
        if self.phase != SubmitPhase::Submitting {
            return Err(Error::NotSubmitting);
        }
        Ok(match outcome {
            Ok(message) => {
                self.password.clear();
                self.confirm_password.clear();
                self.errors = FieldErrors::default();
                self.phase = SubmitPhase::Succeeded(message.clone());
                SubmissionResult::success(message)
            }
            Err(message) => {
                self.phase = SubmitPhase::Failed(message.clone());
                SubmissionResult::failure(message)
            }
        })
    }

    pub fn acknowledge(&mut self) {
        if matches!(self.phase, SubmitPhase::Succeeded(_) | SubmitPhase::Failed(_)) {
            self.phase = SubmitPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Field;

    fn filled() -> PasswordForm {
        let mut form = PasswordForm::new();
        form.password = "Secr3t!pw".into();
        form.confirm_password = "Secr3t!pw".into();
        form
    }

    #[test]
    fn test_submit_builds_request() {
        let mut form = filled();
        let request = form.begin_submit().unwrap();
        assert_eq!(request.new_password, "Secr3t!pw");
        assert!(form.is_busy());
    }

    #[test]
    fn test_mismatch_blocks_submit() {
        let mut form = filled();
        form.confirm_password = "other".into();
        assert!(matches!(form.begin_submit(), Err(Error::Validation(_))));
        assert!(form.field_errors().contains(Field::ConfirmPassword));
        assert_eq!(form.phase(), &SubmitPhase::Idle);
    }

    #[test]
    fn test_success_resets_and_failure_keeps() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let result = form.finish_submit(Err("Old password reused".into())).unwrap();
        assert!(!result.succeeded);
        assert_eq!(form.password, "Secr3t!pw");

        form.acknowledge();
        form.begin_submit().unwrap();
        let result = form.finish_submit(Ok("Password updated".into())).unwrap();
        assert!(result.succeeded);
        assert!(form.password.is_empty());
        assert!(form.confirm_password.is_empty());
    }

    #[test]
    fn test_toggle_visibility() {
        let mut form = PasswordForm::new();
        assert!(!form.show_password());
        form.toggle_visibility();
        assert!(form.show_password());
    }
}
