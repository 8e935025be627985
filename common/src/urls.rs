//! 画像URLの組み立て

/// アップロード画像のパス
pub const UPLOADS_SEGMENT: &str = "uploads/";

/// ベースURLの末尾を `/` に揃える
pub fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

/// サーバー上の画像URL（ベースURL + uploads/ + ファイル名）
pub fn image_url(base_url: &str, file_name: &str) -> String {
    format!("{}{}{}", normalize_base_url(base_url), UPLOADS_SEGMENT, file_name)
}

/// URLの1セグメントとして使えるID（空・`.`・`..` は不可）
///
/// 区切り文字などはエンコードして送るため、ここでは相対パスになる値だけを弾く。
pub fn is_segment_id(id: &str) -> bool {
    !matches!(id.trim(), "" | "." | "..")
}
