//! 端末表示の補助

use catalog_admin_common::{FieldErrors, SubmissionResult};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 通信中のスピナー
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 通知を表示
pub fn notify(result: &SubmissionResult) {
    if result.succeeded {
        println!("✔ {}", result.message);
    } else {
        eprintln!("✖ {}", result.message);
    }
}

/// 項目エラーを表示
pub fn print_field_errors(errors: &FieldErrors) {
    for (field, message) in errors.iter() {
        eprintln!("  {}: {}", field.as_str(), message);
    }
}
