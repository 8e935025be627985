//! マルチパート送信内容
//!
//! HTTPクライアントに依存しない形で送信パートを並べる。
//! CLIは reqwest のフォーム、Webは FormData に変換して送る。

/// 項目名
pub const FIELD_NAME: &str = "name";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_STOCK: &str = "stock";
pub const FIELD_IMAGES: &str = "images";

/// 送信パート
#[derive(Debug, Clone, PartialEq)]
pub enum Part<F> {
    Text { name: String, value: String },
    File { name: String, file: F },
}

impl<F> Part<F> {
    pub fn name(&self) -> &str {
        match self {
            Part::Text { name, .. } | Part::File { name, .. } => name,
        }
    }
}

/// マルチパート送信内容（追加順を保持）
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartPayload<F> {
    parts: Vec<Part<F>>,
}

impl<F> Default for MultipartPayload<F> {
    fn default() -> Self {
        Self { parts: Vec::new() }
    }
}

impl<F> MultipartPayload<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, name: &str, value: impl Into<String>) {
        self.parts.push(Part::Text { name: name.to_string(), value: value.into() });
    }

    pub fn file(&mut self, name: &str, file: F) {
        self.parts.push(Part::File { name: name.to_string(), file });
    }

    pub fn parts(&self) -> &[Part<F>] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Part<F>> {
        self.parts
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parts.iter().any(|p| p.name() == name)
    }

    /// 指定名のテキスト値（追加順）
    pub fn text_values(&self, name: &str) -> Vec<&str> {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Text { name: n, value } if n == name => Some(value.as_str()),
                _ => None,
            })
            .collect()
    }

    /// 指定名のファイル（追加順）
    pub fn files(&self, name: &str) -> Vec<&F> {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::File { name: n, file } if n == name => Some(file),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
