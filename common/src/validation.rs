//! 入力チェック
//!
//! 商品フォームとパスワード再設定フォームの項目単位のチェック。
//! エラーは項目ごとに1件だけ保持する。

use std::collections::BTreeMap;

/// パスワードの最小文字数
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// フォーム項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Price,
    Description,
    Images,
    Password,
    ConfirmPassword,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Price => "price",
            Field::Description => "description",
            Field::Images => "images",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }
}

/// 項目ごとのエラー
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field.as_str(), message))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// 価格として解釈できるか（有限かつ0以上）
pub fn is_valid_price(price: &str) -> bool {
    price
        .trim()
        .parse::<f64>()
        .map(|p| p.is_finite() && p >= 0.0)
        .unwrap_or(false)
}

/// 商品の基本項目をチェック
///
/// `require_staged_image` は新規作成時のみtrue。
pub fn validate_product(
    name: &str,
    price: &str,
    description: &str,
    staged_images: usize,
    require_staged_image: bool,
) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if name.trim().is_empty() {
        errors.insert(Field::Name, "商品名は必須です");
    }

    if price.trim().is_empty() {
        errors.insert(Field::Price, "価格は必須です");
    } else if !is_valid_price(price) {
        errors.insert(Field::Price, "価格は0以上の数値で入力してください");
    }

    if description.trim().is_empty() {
        errors.insert(Field::Description, "説明は必須です");
    }

    if require_staged_image && staged_images == 0 {
        errors.insert(Field::Images, "画像を1枚以上アップロードしてください");
    }

    errors
}

/// 新しいパスワードと確認入力をチェック
pub fn validate_password(password: &str, confirm_password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if password.is_empty() {
        errors.insert(Field::Password, "パスワードは必須です");
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.insert(
            Field::Password,
            format!("パスワードは{}文字以上で入力してください", MIN_PASSWORD_LENGTH),
        );
    } else if !password.chars().any(|c| c.is_lowercase()) {
        errors.insert(Field::Password, "小文字を1文字以上含めてください");
    } else if !password.chars().any(|c| c.is_uppercase()) {
        errors.insert(Field::Password, "大文字を1文字以上含めてください");
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.insert(Field::Password, "数字を1文字以上含めてください");
    } else if !password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace()) {
        errors.insert(Field::Password, "記号を1文字以上含めてください");
    }

    if confirm_password.is_empty() {
        errors.insert(Field::ConfirmPassword, "確認用パスワードは必須です");
    } else if confirm_password != password {
        errors.insert(Field::ConfirmPassword, "パスワードが一致しません");
    }

    errors
}
