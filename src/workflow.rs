//! 画面操作の流れ
//!
//! 共通ライブラリのフォーム状態とAPI呼び出しをつなぐ。
//! 通信エラーはここで通知（SubmissionResult）に変換し、呼び出し元には返さない。

use crate::api::CatalogApi;
use crate::error::Result;
use crate::staging::{FilePreviews, LocalImage};
use catalog_admin_common::{
    PasswordForm, ProductForm, ProductList, SubmissionResult, SubmitReport,
};

/// CLIで使う商品フォーム
pub type NativeProductForm = ProductForm<LocalImage, FilePreviews>;

/// 編集対象の商品を読み込んで下書きを初期化
///
/// 失敗時は通知を返す（下書きは空のまま）。
pub async fn load_product<A: CatalogApi>(
    api: &A,
    form: &mut NativeProductForm,
    base_url: &str,
) -> Option<SubmissionResult> {
    let id = form.edit_id()?.to_string();

    match api.get_product_by_id(&id).await {
        Ok(product) => {
            form.seed(&product, base_url);
            None
        }
        Err(e) => {
            tracing::warn!(%id, error = %e, "商品の読み込みに失敗");
            Some(form.load_failed(e.user_message()))
        }
    }
}

/// 商品を送信（作成または更新）
///
/// 入力エラーはAPIを呼ばずに `Err` で返す。
pub async fn submit_product<A: CatalogApi>(
    api: &A,
    form: &mut NativeProductForm,
) -> Result<SubmitReport> {
    let payload = form.begin_submit()?;
    let edit_id = form.edit_id().map(str::to_string);

    tracing::info!(
        mode = if edit_id.is_some() { "update" } else { "create" },
        parts = payload.len(),
        "商品を送信"
    );
    let outcome = match &edit_id {
        Some(id) => api.update_product(id, payload).await,
        None => api.post_product(payload).await,
    };

    let report = form.finish_submit(outcome.map_err(|e| e.user_message()))?;
    Ok(report)
}

/// 商品一覧を取得
pub async fn fetch_products<A: CatalogApi>(
    api: &A,
    list: &mut ProductList,
) -> Option<SubmissionResult> {
    list.begin_load();
    match api.get_products().await {
        Ok(products) => {
            list.loaded(products);
            None
        }
        Err(e) => Some(list.load_failed(e.user_message())),
    }
}

/// 確認済みの削除を実行
///
/// 削除確認が開いていなければ何もしない。
pub async fn confirm_delete<A: CatalogApi>(
    api: &A,
    list: &mut ProductList,
) -> Option<SubmissionResult> {
    let id = list.pending_delete()?.to_string();
    let outcome = api.delete_product(&id).await.map_err(|e| e.user_message());
    Some(list.finish_delete(&id, outcome))
}

/// パスワード再設定を送信
pub async fn reset_password<A: CatalogApi>(
    api: &A,
    form: &mut PasswordForm,
) -> Result<SubmissionResult> {
    let request = form.begin_submit()?;
    let outcome = api.reset_password(&request).await.map_err(|e| e.user_message());
    Ok(form.finish_submit(outcome)?)
}
