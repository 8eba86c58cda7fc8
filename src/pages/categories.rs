//! Categories Screen
//!
//! Name-only CRUD over product categories.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    ConfirmDialog, ConfirmIntent, ConfirmKind, Modal, ModalMode, Pagination, SearchBar,
};
use crate::forms::{self, FieldErrors};
use crate::list::{ListState, ReloadSeq};
use crate::models::Category;
use crate::notify::Notifier;

const PAGE_SIZE: usize = 10;

fn matches_category(category: &Category, term: &str, _filter: &str) -> bool {
    term.is_empty() || category.name.to_lowercase().contains(term)
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    let list = ListState::<Category>::new(PAGE_SIZE);
    let seq = ReloadSeq::default();
    let (loading, set_loading) = signal(true);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (modal, set_modal) = signal::<Option<ModalMode<Category>>>(None);
    let (confirming, set_confirming) = signal::<Option<ConfirmIntent<Category>>>(None);
    let (confirm_busy, set_confirm_busy) = signal(false);

    Effect::new({
        let seq = seq.clone();
        move |_| {
            let _ = reload_trigger.get();
            let ticket = seq.begin();
            let seq = seq.clone();
            spawn_local(async move {
                match api::list_categories().await {
                    Ok(categories) => {
                        if seq.is_current(ticket) {
                            list.load(categories);
                        }
                    }
                    Err(e) => notifier.error(e.to_string()),
                }
                set_loading.set(false);
            });
        }
    });

    let reload = move || set_reload_trigger.update(|v| *v += 1);

    let run_confirm = move || {
        let Some(intent) = confirming.get_untracked() else { return };
        set_confirm_busy.set(true);
        spawn_local(async move {
            let result = api::delete_category(intent.target.id).await;
            set_confirm_busy.set(false);
            match result {
                Ok(()) => {
                    notifier.success(format!("Category \"{}\" deleted", intent.target.name));
                    set_confirming.set(None);
                    reload();
                }
                Err(e) => notifier.error(e.to_string()),
            }
        });
    };

    view! {
        <div class="page categories-page">
            <div class="page-toolbar">
                <SearchBar
                    placeholder="Search categories..."
                    value=list.search
                    on_input=Callback::new(move |term| list.set_search(term))
                />
                <button class="primary-btn" on:click=move |_| set_modal.set(Some(ModalMode::Create))>
                    "Add category"
                </button>
            </div>

            <Show when=move || loading.get()>
                <div class="table-skeleton">"Loading categories..."</div>
            </Show>

            <Show when=move || !loading.get()>
                {move || {
                    let pv = list.view(matches_category);
                    if pv.rows.is_empty() {
                        let copy = if list.search.get().trim().is_empty() {
                            "No categories yet."
                        } else {
                            "No categories match the current search."
                        };
                        return view! { <div class="empty-state">{copy}</div> }.into_any();
                    }
                    let pages = pv.pages;
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {pv.rows.into_iter().map(|category| {
                                    let edit_category = category.clone();
                                    let delete_category = category.clone();
                                    view! {
                                        <tr>
                                            <td>{category.name.clone()}</td>
                                            <td class="row-actions">
                                                <button on:click=move |_| set_modal.set(Some(ModalMode::Edit(edit_category.clone())))>
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="danger-btn"
                                                    on:click=move |_| set_confirming.set(Some(ConfirmIntent {
                                                        kind: ConfirmKind::Delete,
                                                        target: delete_category.clone(),
                                                    }))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                        <Pagination
                            page=pv.page
                            pages=pv.pages
                            on_select=Callback::new(move |p| list.go_to(p, pages))
                        />
                    }.into_any()
                }}
            </Show>

            {move || modal.get().map(|mode| view! {
                <CategoryForm
                    mode=mode
                    on_done=Callback::new(move |saved: bool| {
                        set_modal.set(None);
                        if saved {
                            reload();
                        }
                    })
                />
            })}

            {move || confirming.get().map(|intent| view! {
                <ConfirmDialog
                    title="Delete category"
                    message=format!("Delete category \"{}\"? Products keep their data but lose this grouping.", intent.target.name)
                    busy=confirm_busy
                    on_confirm=Callback::new(move |_| run_confirm())
                    on_cancel=Callback::new(move |_| set_confirming.set(None))
                />
            })}
        </div>
    }
}

#[component]
fn CategoryForm(mode: ModalMode<Category>, #[prop(into)] on_done: Callback<bool>) -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    let editing = match &mode {
        ModalMode::Edit(category) | ModalMode::View(category) => Some(category.clone()),
        ModalMode::Create => None,
    };
    let title = if editing.is_some() { "Edit category" } else { "Add category" };
    let existing_id = editing.as_ref().map(|c| c.id);

    let (name, set_name) = signal(editing.as_ref().map(|c| c.name.clone()).unwrap_or_default());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let mut field_errors = FieldErrors::new();
        forms::required("name", &name.get(), &mut field_errors);
        let blocked = !field_errors.is_empty();
        set_errors.set(field_errors);
        if blocked {
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            let trimmed = name.get_untracked().trim().to_string();
            let result = match existing_id {
                Some(id) => api::update_category(id, &trimmed).await,
                None => api::create_category(&trimmed).await,
            };
            set_submitting.set(false);
            match result {
                Ok(saved) => {
                    notifier.success(format!("Category \"{}\" saved", saved.name));
                    on_done.run(true);
                }
                Err(e) => notifier.error(e.to_string()),
            }
        });
    };

    let field_error = move |field: &'static str| {
        errors
            .get()
            .get(field)
            .cloned()
            .map(|message| view! { <span class="field-error">{message}</span> })
    };

    view! {
        <Modal title=title on_close=Callback::new(move |_| on_done.run(false))>
            <form class="modal-form" on:submit=on_submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                {move || field_error("name")}
                <div class="modal-actions">
                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button type="button" class="cancel-btn" on:click=move |_| on_done.run(false)>
                        "Cancel"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
