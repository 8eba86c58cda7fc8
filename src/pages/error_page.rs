//! Error Screen
//!
//! Terminal screen for rendering failures unrelated to data. The message
//! travels in app state, not in the URL.

use leptos::prelude::*;

use crate::context::{AppContext, Screen};

#[component]
pub fn ErrorPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="page error-page">
            <h1>"Something went wrong"</h1>
            <p class="error-detail">
                {move || ctx.error_message.get().unwrap_or_else(|| "An unexpected error occurred.".to_string())}
            </p>
            <button class="primary-btn" on:click=move |_| {
                ctx.error_message.set(None);
                ctx.go_to(Screen::Users);
            }>
                "Back to safety"
            </button>
        </div>
    }
}
