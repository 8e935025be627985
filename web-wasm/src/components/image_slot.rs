//! 画像スロットコンポーネント
//!
//! 表示とファイル選択だけを担当し、状態は持たない。
//! 選択・削除・在庫入力はすべて呼び出し元のコールバックへ渡す。

use leptos::prelude::*;
use web_sys::{DragEvent, File, HtmlInputElement};

#[component]
pub fn ImageSlot<FP, FR, FS>(
    index: usize,
    /// ホスト済み画像URLまたはプレビューURL
    #[prop(into)]
    image_url: Signal<Option<String>>,
    #[prop(into)]
    stock: Signal<String>,
    /// 在庫ラベル欄を表示する
    show_stock: bool,
    /// 削除可能（新規登録時のみ）
    editable: bool,
    on_pick: FP,
    on_remove: FR,
    on_stock: FS,
) -> impl IntoView
where
    FP: Fn(File) + 'static + Clone,
    FR: Fn() + 'static,
    FS: Fn(String) + 'static,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_id = format!("image-slot-{}", index);
    let label_for = input_id.clone();

    let on_change = {
        let on_pick = on_pick.clone();
        move |ev: web_sys::Event| {
            let input: HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_pick(file);
            }
            // 同じファイルを選び直しても change が発火するように
            input.set_value("");
        }
    };

    let on_drop = {
        let on_pick = on_pick.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);
            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                on_pick(file);
            }
        }
    };

    view! {
        <div class="image-slot" class:dragover=move || is_dragover.get()>
            <label
                class="image-slot-picker"
                for=label_for
                on:dragover=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_is_dragover.set(true);
                }
                on:dragleave=move |_: DragEvent| set_is_dragover.set(false)
                on:drop=on_drop
            >
                {move || match image_url.get() {
                    Some(url) => view! { <img src=url alt=format!("画像 {}", index + 1) /> }.into_any(),
                    None => view! { <span class="image-slot-empty">"📷 クリックして画像を選択"</span> }.into_any(),
                }}
            </label>
            <input
                id=input_id
                type="file"
                accept="image/*"
                class="hidden"
                on:change=on_change
            />
            {show_stock.then(|| view! {
                <input
                    type="text"
                    class="image-slot-stock"
                    placeholder="在庫"
                    prop:value=move || stock.get()
                    on:input=move |ev| on_stock(event_target_value(&ev))
                />
            })}
            {editable.then(|| view! {
                <button
                    type="button"
                    class="btn btn-small btn-tertiary"
                    on:click=move |_| on_remove()
                >
                    "削除"
                </button>
            })}
        </div>
    }
}
