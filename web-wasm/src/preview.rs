//! 選択画像のプレビューURL（blob: URL）

use catalog_admin_common::{Error, PreviewStore, Result};
use web_sys::{File, Url};

/// `URL.createObjectURL` で発行したURLを管理
#[derive(Default)]
pub struct ObjectUrlPreviews {
    active: Vec<String>,
}

impl PreviewStore<File> for ObjectUrlPreviews {
    fn acquire(&mut self, file: &File) -> Result<String> {
        let url = Url::create_object_url_with_blob(file)
            .map_err(|e| Error::Preview(format!("{:?}", e)))?;
        self.active.push(url.clone());
        Ok(url)
    }

    /// 自分が発行したURLだけを破棄する
    fn release(&mut self, url: &str) {
        let Some(pos) = self.active.iter().position(|u| u == url) else {
            return;
        };
        self.active.swap_remove(pos);
        if let Err(e) = Url::revoke_object_url(url) {
            web_sys::console::warn_1(&e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_ignores_foreign_url() {
        let mut previews = ObjectUrlPreviews {
            active: vec!["blob:http://localhost/a".to_string()],
        };

        // ホスト済み画像のURLなど、発行していないURLは破棄しない
        previews.release("http://localhost:5000/uploads/chair.jpg");
        assert_eq!(previews.active, vec!["blob:http://localhost/a"]);
    }
}
