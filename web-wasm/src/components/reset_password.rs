//! パスワード再設定画面

use crate::api;
use crate::app::use_app;
use catalog_admin_common::{Field, PasswordForm, SubmissionResult};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ResetPasswordView() -> impl IntoView {
    let ctx = use_app();
    let form = RwSignal::new(PasswordForm::new());

    let error = move |field: Field| form.with(|f| f.field_errors().get(field).map(str::to_string));
    let input_type = move || if form.with(|f| f.show_password()) { "text" } else { "password" };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(request)) = form.try_update(|f| f.begin_submit()) else {
            return;
        };

        spawn_local(async move {
            let outcome = api::reset_password(&request).await;
            let result = form.try_update(|f| {
                let result = f.finish_submit(outcome);
                f.acknowledge();
                result
            });
            match result {
                Some(Ok(result)) => ctx.notify(result),
                Some(Err(e)) => ctx.notify(SubmissionResult::failure(e.to_string())),
                None => {}
            }
        });
    };

    view! {
        <form class="reset-password" on:submit=on_submit>
            <h2>"パスワード再設定"</h2>

            <div class="form-group">
                <label for="new-password">"新しいパスワード"</label>
                <input
                    id="new-password"
                    type=input_type
                    autocomplete="new-password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <p class="field-error">{move || error(Field::Password)}</p>
            </div>

            <div class="form-group">
                <label for="confirm-password">"確認用パスワード"</label>
                <input
                    id="confirm-password"
                    type=input_type
                    autocomplete="new-password"
                    prop:value=move || form.with(|f| f.confirm_password.clone())
                    on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                />
                <p class="field-error">{move || error(Field::ConfirmPassword)}</p>
            </div>

            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.show_password())
                    on:change=move |_| form.update(|f| f.toggle_visibility())
                />
                "パスワードを表示"
            </label>

            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || form.with(|f| f.is_busy())
            >
                {move || if form.with(|f| f.is_busy()) { "送信中..." } else { "再設定" }}
            </button>
        </form>
    }
}
