//! 通知トースト

use crate::app::use_app;
use leptos::prelude::*;
use std::time::Duration;

const TOAST_DURATION: Duration = Duration::from_secs(4);

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_app();

    // 同じ通知が表示されたままなら閉じる
    Effect::new(move |_| {
        let shown = ctx.toast.get();
        if shown.is_some() {
            set_timeout(
                move || {
                    if ctx.toast.get_untracked() == shown {
                        ctx.toast.set(None);
                    }
                },
                TOAST_DURATION,
            );
        }
    });

    move || {
        ctx.toast.get().map(|result| {
            let class = if result.succeeded { "toast toast-success" } else { "toast toast-error" };
            view! {
                <div class=class role="status">
                    <span>{result.message}</span>
                    <button class="toast-close" on:click=move |_| ctx.toast.set(None)>"×"</button>
                </div>
            }
        })
    }
}
