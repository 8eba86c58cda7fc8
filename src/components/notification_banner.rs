//! Notification Banner Component
//!
//! Renders the single notification slot; at most one banner is visible.

use leptos::prelude::*;

use crate::notify::Notifier;

#[component]
pub fn NotificationBanner() -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    view! {
        {move || notifier.current().map(|notice| view! {
            <div class=format!("notice notice-{}", notice.kind.css())>
                <span class="notice-message">{notice.message}</span>
                <button class="notice-dismiss" on:click=move |_| notifier.dismiss()>"×"</button>
            </div>
        })}
    }
}
