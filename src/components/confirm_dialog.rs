//! Confirm Dialog Component
//!
//! A deferred destructive action awaiting explicit confirmation.
//! Canceling discards the intent; confirming executes it once.

use leptos::prelude::*;

use super::Modal;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfirmKind {
    Delete,
    Block,
    Unblock,
}

impl ConfirmKind {
    pub fn verb(&self) -> &'static str {
        match self {
            ConfirmKind::Delete => "Delete",
            ConfirmKind::Block => "Block",
            ConfirmKind::Unblock => "Unblock",
        }
    }
}

/// A pending destructive action on `target`
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmIntent<T> {
    pub kind: ConfirmKind,
    pub target: T,
}

#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_cancel>
            <p class="confirm-message">{message}</p>
            <div class="confirm-actions">
                <button
                    class="confirm-btn"
                    disabled=move || busy.get()
                    on:click=move |_| on_confirm.run(())
                >
                    {move || if busy.get() { "Processing..." } else { "Confirm" }}
                </button>
                <button class="cancel-btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </Modal>
    }
}
