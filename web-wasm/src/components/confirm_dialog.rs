//! 確認ダイアログ

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog<FC, FX>(
    #[prop(into)]
    message: Signal<String>,
    /// 処理中はボタンを無効化
    #[prop(into)]
    busy: Signal<bool>,
    on_confirm: FC,
    on_cancel: FX,
) -> impl IntoView
where
    FC: Fn() + 'static,
    FX: Fn() + 'static,
{
    view! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog" aria-modal="true">
                <p>{move || message.get()}</p>
                <div class="modal-actions">
                    <button
                        class="btn btn-secondary"
                        disabled=move || busy.get()
                        on:click=move |_| on_cancel()
                    >
                        "キャンセル"
                    </button>
                    <button
                        class="btn btn-danger"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm()
                    >
                        {move || if busy.get() { "削除中..." } else { "削除" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
