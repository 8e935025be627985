//! メインアプリケーションコンポーネント

use crate::components::{
    header::Header,
    product_form::ProductFormView,
    product_list::ProductListView,
    reset_password::ResetPasswordView,
    toast::Toast,
};
use catalog_admin_common::{FormMode, SubmissionResult};
use leptos::prelude::*;

/// 表示中の画面
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Products,
    AddProduct,
    EditProduct(String),
    ResetPassword,
}

/// 画面間で共有する状態
#[derive(Clone, Copy)]
pub struct AppContext {
    pub screen: RwSignal<Screen>,
    pub toast: RwSignal<Option<SubmissionResult>>,
}

impl AppContext {
    pub fn navigate(&self, screen: Screen) {
        self.screen.set(screen);
    }

    pub fn notify(&self, result: SubmissionResult) {
        self.toast.set(Some(result));
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext {
        screen: RwSignal::new(Screen::Products),
        toast: RwSignal::new(None),
    };
    provide_context(ctx);

    view! {
        <div class="container">
            <Header />
            <Toast />
            {move || match ctx.screen.get() {
                Screen::Products => view! { <ProductListView /> }.into_any(),
                Screen::AddProduct => view! { <ProductFormView mode=FormMode::Create /> }.into_any(),
                Screen::EditProduct(id) => {
                    let mode = FormMode::Edit { id };
                    view! { <ProductFormView mode=mode /> }.into_any()
                }
                Screen::ResetPassword => view! { <ResetPasswordView /> }.into_any(),
            }}
        </div>
    }
}
