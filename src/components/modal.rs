//! Modal Component
//!
//! Blocking dialog hosting a create/edit/view/confirm body. Keyboard
//! focus is contained while open: focus lands on the first focusable
//! element, Tab from the last wraps to the first, Shift+Tab from the
//! first wraps to the last. Escape and backdrop click close
//! unconditionally, discarding any in-progress draft.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

const FOCUSABLE: &str = "a[href], button:not([disabled]), input, select, textarea";

/// What a screen's single modal slot is showing. Opening another mode
/// replaces the content, dialogs never stack.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalMode<T: 'static> {
    Create,
    Edit(T),
    View(T),
}

fn focusables(panel: &web_sys::HtmlElement) -> Vec<web_sys::HtmlElement> {
    let mut elements = Vec::new();
    if let Ok(nodes) = panel.query_selector_all(FOCUSABLE) {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok()) {
                elements.push(el);
            }
        }
    }
    elements
}

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let panel_ref: NodeRef<leptos::html::Div> = NodeRef::new();

    // Focus moves into the dialog as soon as it renders
    Effect::new(move |_| {
        if let Some(panel) = panel_ref.get() {
            if let Some(first) = focusables(&panel).into_iter().next() {
                let _ = first.focus();
            }
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        match ev.key().as_str() {
            "Escape" => on_close.run(()),
            "Tab" => {
                let Some(panel) = panel_ref.get_untracked() else { return };
                let elements = focusables(&panel);
                let (Some(first), Some(last)) = (elements.first(), elements.last()) else {
                    return;
                };
                let active: Option<web_sys::HtmlElement> = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.active_element())
                    .and_then(|el| el.dyn_into().ok());
                if ev.shift_key() {
                    if active.as_ref() == Some(first) {
                        ev.prevent_default();
                        let _ = last.focus();
                    }
                } else if active.as_ref() == Some(last) {
                    ev.prevent_default();
                    let _ = first.focus();
                }
            }
            _ => {}
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="modal-panel"
                node_ref=panel_ref
                on:click=|ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="modal-header">
                    <span class="modal-title">{title}</span>
                    <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
