//! ヘッダーコンポーネント

use crate::app::{use_app, Screen};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app();
    let is_active = move |screen: Screen| ctx.screen.get() == screen;

    view! {
        <header class="header">
            <h1>"Catalog Admin - 商品管理"</h1>
            <nav class="header-nav">
                <button
                    class="btn btn-tertiary"
                    class:active=move || is_active(Screen::Products)
                    on:click=move |_| ctx.navigate(Screen::Products)
                >
                    "商品一覧"
                </button>
                <button
                    class="btn btn-tertiary"
                    class:active=move || is_active(Screen::AddProduct)
                    on:click=move |_| ctx.navigate(Screen::AddProduct)
                >
                    "商品登録"
                </button>
                <button
                    class="btn btn-tertiary"
                    class:active=move || is_active(Screen::ResetPassword)
                    on:click=move |_| ctx.navigate(Screen::ResetPassword)
                >
                    "パスワード再設定"
                </button>
            </nav>
        </header>
    }
}
