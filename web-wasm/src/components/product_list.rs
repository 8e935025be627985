//! 商品一覧コンポーネント
//!
//! ドラッグ&ドロップの並べ替えは画面上のみ（サーバーには保存しない）。

use crate::api;
use crate::app::{use_app, Screen};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::config::api_base_url;
use catalog_admin_common::{cover_url, Product, ProductList};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProductListView() -> impl IntoView {
    let ctx = use_app();
    let list = RwSignal::new(ProductList::new());
    let deleting = RwSignal::new(false);
    let (dragging_id, set_dragging_id) = signal(None::<String>);
    let (drag_over_id, set_drag_over_id) = signal(None::<String>);

    list.update(|l| l.begin_load());
    spawn_local(async move {
        match api::get_products().await {
            Ok(items) => {
                list.try_update(|l| l.loaded(items));
            }
            Err(message) => {
                if let Some(result) = list.try_update(|l| l.load_failed(message)) {
                    ctx.notify(result);
                }
            }
        }
    });

    let on_confirm_delete = move || {
        let Some(id) = list.with(|l| l.pending_delete().map(str::to_string)) else {
            return;
        };
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        spawn_local(async move {
            let outcome = api::delete_product(&id).await;
            if let Some(result) = list.try_update(|l| l.finish_delete(&id, outcome)) {
                ctx.notify(result);
            }
            deleting.try_set(false);
        });
    };

    let pending_name = Signal::derive(move || {
        list.with(|l| {
            l.pending_delete()
                .and_then(|id| l.position(id))
                .map(|i| format!("「{}」を削除しますか?", l.items()[i].name))
                .unwrap_or_default()
        })
    });

    view! {
        <div class="product-list">
            <div class="product-list-header">
                <h2>"商品一覧"</h2>
                <button class="btn btn-primary" on:click=move |_| ctx.navigate(Screen::AddProduct)>
                    "＋ 新規登録"
                </button>
            </div>

            <Show when=move || list.with(|l| l.is_loading())>
                <p class="text-muted">"読み込み中..."</p>
            </Show>
            <Show when=move || list.with(|l| !l.is_loading() && l.is_empty())>
                <p class="text-muted">"商品がありません"</p>
            </Show>

            <For
                each=move || list.with(|l| l.items().to_vec())
                key=|product| product.id.clone()
                children=move |product| {
                    view! {
                        <ProductRow
                            product=product
                            dragging_id=dragging_id
                            set_dragging_id=set_dragging_id
                            drag_over_id=drag_over_id
                            set_drag_over_id=set_drag_over_id
                            on_reorder=move |from: String, to: String| {
                                list.update(|l| {
                                    l.reorder_by_id(&from, &to);
                                });
                            }
                            on_edit=move |id: String| ctx.navigate(Screen::EditProduct(id))
                            on_delete=move |id: String| {
                                list.update(|l| {
                                    l.request_delete(&id);
                                });
                            }
                        />
                    }
                }
            />

            <Show when=move || list.with(|l| l.pending_delete().is_some())>
                <ConfirmDialog
                    message=pending_name
                    busy=deleting
                    on_confirm=on_confirm_delete
                    on_cancel=move || list.update(|l| l.cancel_delete())
                />
            </Show>
        </div>
    }
}

#[component]
fn ProductRow<FR, FE, FD>(
    product: Product,
    dragging_id: ReadSignal<Option<String>>,
    set_dragging_id: WriteSignal<Option<String>>,
    drag_over_id: ReadSignal<Option<String>>,
    set_drag_over_id: WriteSignal<Option<String>>,
    on_reorder: FR,
    on_edit: FE,
    on_delete: FD,
) -> impl IntoView
where
    FR: Fn(String, String) + 'static,
    FE: Fn(String) + 'static,
    FD: Fn(String) + 'static,
{
    let cover = cover_url(&product, &api_base_url());

    let is_dragging = {
        let product_id = product.id.clone();
        move || dragging_id.get().as_deref() == Some(product_id.as_str())
    };

    let is_drag_over = {
        let product_id = product.id.clone();
        move || drag_over_id.get().as_deref() == Some(product_id.as_str())
    };

    view! {
        <div
            class="product-row"
            class:dragging=is_dragging
            class:drag-over=is_drag_over
            draggable="true"
            on:dragstart={
                let product_id = product.id.clone();
                move |_| set_dragging_id.set(Some(product_id.clone()))
            }
            on:dragend=move |_| {
                set_dragging_id.set(None);
                set_drag_over_id.set(None);
            }
            on:dragover={
                let product_id = product.id.clone();
                move |ev| {
                    ev.prevent_default();
                    set_drag_over_id.set(Some(product_id.clone()));
                }
            }
            on:dragleave=move |_| set_drag_over_id.set(None)
            on:drop={
                let product_id = product.id.clone();
                move |ev| {
                    ev.prevent_default();
                    if let Some(from_id) = dragging_id.get() {
                        if from_id != product_id {
                            on_reorder(from_id, product_id.clone());
                        }
                    }
                    set_dragging_id.set(None);
                    set_drag_over_id.set(None);
                }
            }
        >
            {match cover {
                Some(url) => view! { <img class="product-cover" src=url alt=product.name.clone() /> }.into_any(),
                None => view! { <div class="product-cover placeholder">"No image"</div> }.into_any(),
            }}
            <div class="product-info">
                <h4>{product.name.clone()}</h4>
                <p>{format!("¥{}", product.price)}</p>
                <p class="text-muted">{product.description.clone()}</p>
            </div>
            <div class="product-actions">
                <button
                    class="btn btn-small btn-secondary"
                    on:click={
                        let product_id = product.id.clone();
                        move |_| on_edit(product_id.clone())
                    }
                >
                    "編集"
                </button>
                <button
                    class="btn btn-small btn-danger"
                    on:click={
                        let product_id = product.id.clone();
                        move |_| on_delete(product_id.clone())
                    }
                >
                    "削除"
                </button>
            </div>
        </div>
    }
}
