//! 商品フォーム（新規登録・編集）

use crate::api;
use crate::app::{use_app, AppContext, Screen};
use crate::components::image_slot::ImageSlot;
use crate::config::{api_base_url, stock_mode};
use crate::preview::ObjectUrlPreviews;
use catalog_admin_common::{
    AfterSubmit, Field, FormMode, ProductForm, StockMode, SubmissionResult,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

type WebProductForm = ProductForm<File, ObjectUrlPreviews>;
type FormSignal = RwSignal<WebProductForm, LocalStorage>;

fn field_error(form: FormSignal, field: Field) -> impl Fn() -> Option<String> + Copy {
    move || form.with(|f| f.field_errors().get(field).map(str::to_string))
}

fn report_slot_error(ctx: AppContext, result: Option<catalog_admin_common::Result<()>>) {
    if let Some(Err(e)) = result {
        ctx.notify(SubmissionResult::failure(e.to_string()));
    }
}

#[component]
pub fn ProductFormView(mode: FormMode) -> impl IntoView {
    let ctx = use_app();
    let form: FormSignal = RwSignal::new_local(ProductForm::new(
        mode.clone(),
        stock_mode(),
        ObjectUrlPreviews::default(),
    ));
    let show_stock = stock_mode() == StockMode::PerImage;
    let editable = form.with_untracked(|f| f.slots_editable());
    let title = if editable { "商品登録" } else { "商品編集" };

    if let FormMode::Edit { id } = mode {
        spawn_local(async move {
            let outcome = api::get_product_by_id(&id).await;
            let failure = form
                .try_update(|f| match outcome {
                    Ok(product) => {
                        f.seed(&product, &api_base_url());
                        None
                    }
                    Err(message) => Some(f.load_failed(message)),
                })
                .flatten();
            if let Some(result) = failure {
                ctx.notify(result);
            }
        });
    }

    // 画面を離れたらプレビューURLを解放
    on_cleanup(move || {
        form.try_update(|f| f.slots_mut().clear());
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let started = form.try_update(|f| {
            let edit_id = f.edit_id().map(str::to_string);
            f.begin_submit().map(|payload| (edit_id, payload))
        });
        // 入力エラーは各項目に表示済み
        let Some(Ok((edit_id, payload))) = started else {
            return;
        };

        spawn_local(async move {
            let outcome = match &edit_id {
                Some(id) => api::update_product(id, payload).await,
                None => api::post_product(payload).await,
            };
            let fallback = match &outcome {
                Ok(message) => SubmissionResult::success(message.clone()),
                Err(message) => SubmissionResult::failure(message.clone()),
            };

            let report = form.try_update(|f| {
                let report = f.finish_submit(outcome);
                f.acknowledge();
                report
            });
            match report {
                Some(Ok(report)) => {
                    ctx.notify(report.result);
                    if report.next == AfterSubmit::GoToCreate {
                        ctx.navigate(Screen::AddProduct);
                    }
                }
                Some(Err(e)) => ctx.notify(SubmissionResult::failure(e.to_string())),
                // 送信中に画面を離れた
                None => ctx.notify(fallback),
            }
        });
    };

    view! {
        <form class="product-form" on:submit=on_submit>
            <h2>{title}</h2>

            <div class="form-group">
                <label for="product-name">"商品名"</label>
                <input
                    type="text"
                    id="product-name"
                    prop:value=move || form.with(|f| f.name().to_string())
                    on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
                />
                <p class="field-error">{field_error(form, Field::Name)}</p>
            </div>

            <div class="form-group">
                <label for="product-price">"価格"</label>
                <input
                    type="text"
                    id="product-price"
                    inputmode="decimal"
                    prop:value=move || form.with(|f| f.price().to_string())
                    on:input=move |ev| form.update(|f| f.set_price(event_target_value(&ev)))
                />
                <p class="field-error">{field_error(form, Field::Price)}</p>
            </div>

            <div class="form-group">
                <label for="product-description">"説明"</label>
                <textarea
                    id="product-description"
                    prop:value=move || form.with(|f| f.description().to_string())
                    on:input=move |ev| form.update(|f| f.set_description(event_target_value(&ev)))
                ></textarea>
                <p class="field-error">{field_error(form, Field::Description)}</p>
            </div>

            <div class="image-slots">
                <For
                    each=move || 0..form.with(|f| f.slots().len())
                    key=|index| *index
                    children=move |index| {
                        let image_url = Signal::derive(move || {
                            form.with(|f| {
                                f.slots()
                                    .get(index)
                                    .and_then(|slot| slot.image.display_url().map(str::to_string))
                            })
                        });
                        let stock = Signal::derive(move || {
                            form.with(|f| {
                                f.slots().get(index).map(|slot| slot.stock.clone()).unwrap_or_default()
                            })
                        });
                        view! {
                            <ImageSlot
                                index=index
                                image_url=image_url
                                stock=stock
                                show_stock=show_stock
                                editable=editable
                                on_pick=move |file: File| {
                                    report_slot_error(
                                        ctx,
                                        form.try_update(|f| f.slots_mut().set_image_at(index, file)),
                                    );
                                }
                                on_remove=move || {
                                    report_slot_error(
                                        ctx,
                                        form.try_update(|f| f.slots_mut().remove_at(index).map(|_| ())),
                                    );
                                }
                                on_stock=move |value: String| {
                                    report_slot_error(
                                        ctx,
                                        form.try_update(|f| f.slots_mut().set_stock_at(index, value)),
                                    );
                                }
                            />
                        }
                    }
                />
            </div>
            <p class="field-error">{field_error(form, Field::Images)}</p>

            {editable.then(|| view! {
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |_| form.update(|f| f.slots_mut().append())
                >
                    "＋ 画像を追加"
                </button>
            })}

            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || form.with(|f| f.is_busy())
            >
                {move || if form.with(|f| f.is_busy()) { "送信中..." } else { "保存" }}
            </button>
        </form>
    }
}
