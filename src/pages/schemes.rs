//! Schemes Screen
//!
//! Scheme CRUD. The create/edit modal keeps `amount`, `months` and
//! `monthly_pay` consistent live (see `forms`), and the identity is
//! re-enforced once more at submit.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    ConfirmDialog, ConfirmIntent, ConfirmKind, Modal, ModalMode, Pagination, SearchBar,
};
use crate::forms::{self, FieldErrors};
use crate::list::{ListState, ReloadSeq};
use crate::models::{Scheme, SchemeDraft};
use crate::notify::Notifier;

const PAGE_SIZE: usize = 10;

fn matches_scheme(scheme: &Scheme, term: &str, _filter: &str) -> bool {
    term.is_empty() || scheme.name.to_lowercase().contains(term)
}

#[component]
pub fn SchemesPage() -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    let list = ListState::<Scheme>::new(PAGE_SIZE);
    let seq = ReloadSeq::default();
    let (loading, set_loading) = signal(true);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (modal, set_modal) = signal::<Option<ModalMode<Scheme>>>(None);
    let (confirming, set_confirming) = signal::<Option<ConfirmIntent<Scheme>>>(None);
    let (confirm_busy, set_confirm_busy) = signal(false);

    Effect::new({
        let seq = seq.clone();
        move |_| {
            let _ = reload_trigger.get();
            let ticket = seq.begin();
            let seq = seq.clone();
            spawn_local(async move {
                match api::list_schemes().await {
                    Ok(schemes) => {
                        if seq.is_current(ticket) {
                            list.load(schemes);
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
            let result = api::delete_scheme(intent.target.id).await;
            set_confirm_busy.set(false);
            match result {
                Ok(()) => {
                    notifier.success(format!("Scheme \"{}\" deleted", intent.target.name));
                    set_confirming.set(None);
                    reload();
                }
                Err(e) => notifier.error(e.to_string()),
            }
        });
    };

    view! {
        <div class="page schemes-page">
            <div class="page-toolbar">
                <SearchBar
                    placeholder="Search schemes..."
                    value=list.search
                    on_input=Callback::new(move |term| list.set_search(term))
                />
                <button class="primary-btn" on:click=move |_| set_modal.set(Some(ModalMode::Create))>
                    "Add scheme"
                </button>
            </div>

            <Show when=move || loading.get()>
                <div class="table-skeleton">"Loading schemes..."</div>
            </Show>

            <Show when=move || !loading.get()>
                {move || {
                    let pv = list.view(matches_scheme);
                    if pv.rows.is_empty() {
                        let copy = if list.search.get().trim().is_empty() {
                            "No schemes yet."
                        } else {
                            "No schemes match the current search."
                        };
                        return view! { <div class="empty-state">{copy}</div> }.into_any();
                    }
                    let pages = pv.pages;
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Months"</th>
                                    <th>"Amount"</th>
                                    <th>"Monthly pay"</th>
                                    <th>"Bonus"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {pv.rows.into_iter().map(|scheme| {
                                    let edit_scheme = scheme.clone();
                                    let delete_scheme = scheme.clone();
                                    view! {
                                        <tr>
                                            <td>{scheme.name.clone()}</td>
                                            <td>{scheme.months}</td>
                                            <td>{format!("{:.2}", scheme.amount)}</td>
                                            <td>{format!("{:.2}", scheme.monthly_pay)}</td>
                                            <td>{format!("{:.2}", scheme.bonus)}</td>
                                            <td class="row-actions">
                                                <button on:click=move |_| set_modal.set(Some(ModalMode::Edit(edit_scheme.clone())))>
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="danger-btn"
                                                    on:click=move |_| set_confirming.set(Some(ConfirmIntent {
                                                        kind: ConfirmKind::Delete,
                                                        target: delete_scheme.clone(),
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
                <SchemeForm
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
                    title="Delete scheme"
                    message=format!("Delete scheme \"{}\"?", intent.target.name)
                    busy=confirm_busy
                    on_confirm=Callback::new(move |_| run_confirm())
                    on_cancel=Callback::new(move |_| set_confirming.set(None))
                />
            })}
        </div>
    }
}

/// Scheme create/edit form. Two derivations are registered
/// independently: `(months, amount)` drives `monthly_pay` and
/// `(months, monthly_pay)` drives `amount`, each behind the epsilon
/// guard so rounding residue cannot ping-pong between them.
#[component]
fn SchemeForm(mode: ModalMode<Scheme>, #[prop(into)] on_done: Callback<bool>) -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    let editing = match &mode {
        ModalMode::Edit(scheme) | ModalMode::View(scheme) => Some(scheme.clone()),
        ModalMode::Create => None,
    };
    let title = if editing.is_some() { "Edit scheme" } else { "Add scheme" };
    let existing_id = editing.as_ref().map(|s| s.id);

    let name = RwSignal::new(editing.as_ref().map(|s| s.name.clone()).unwrap_or_default());
    let months = RwSignal::new(editing.as_ref().map(|s| s.months).unwrap_or(0));
    let amount = RwSignal::new(editing.as_ref().map(|s| s.amount).unwrap_or(0.0));
    let monthly_pay = RwSignal::new(editing.as_ref().map(|s| s.monthly_pay).unwrap_or(0.0));
    let bonus = RwSignal::new(editing.as_ref().map(|s| s.bonus).unwrap_or(0.0));
    let (errors, set_errors) = signal(FieldErrors::new());
    let (submitting, set_submitting) = signal(false);

    // (months, amount) -> monthly_pay
    Effect::new(move |_| {
        let m = months.get();
        let a = amount.get();
        if let Some(next) = forms::derive_monthly_pay(m, a, monthly_pay.get_untracked()) {
            monthly_pay.set(next);
        }
    });

    // (months, monthly_pay) -> amount
    Effect::new(move |_| {
        let m = months.get();
        let p = monthly_pay.get();
        if let Some(next) = forms::derive_amount(m, p, amount.get_untracked()) {
            amount.set(next);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        // recompute once more so the identity holds no matter which
        // field was touched last
        let draft = forms::finalize(SchemeDraft {
            name: name.get_untracked().trim().to_string(),
            months: months.get_untracked(),
            amount: amount.get_untracked(),
            monthly_pay: monthly_pay.get_untracked(),
            bonus: bonus.get_untracked(),
        });
        let field_errors = forms::validate_scheme(&draft);
        let blocked = !field_errors.is_empty();
        set_errors.set(field_errors);
        if blocked {
            return;
        }
        monthly_pay.set(draft.monthly_pay);

        set_submitting.set(true);
        spawn_local(async move {
            let result = match existing_id {
                Some(id) => api::update_scheme(id, &draft).await,
                None => api::create_scheme(&draft).await,
            };
            set_submitting.set(false);
            match result {
                Ok(saved) => {
                    notifier.success(format!("Scheme \"{}\" saved", saved.name));
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
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                {move || field_error("name")}
                <label>
                    "Months"
                    <input
                        type="number"
                        min="1"
                        step="1"
                        prop:value=move || months.get().to_string()
                        on:input=move |ev| months.set(event_target_value(&ev).parse().unwrap_or(0))
                    />
                </label>
                {move || field_error("months")}
                <label>
                    "Total amount"
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || amount.get().to_string()
                        on:input=move |ev| amount.set(event_target_value(&ev).parse().unwrap_or(0.0))
                    />
                </label>
                {move || field_error("amount")}
                <label>
                    "Monthly pay"
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || monthly_pay.get().to_string()
                        on:input=move |ev| monthly_pay.set(event_target_value(&ev).parse().unwrap_or(0.0))
                    />
                </label>
                {move || field_error("monthly_pay")}
                <label>
                    "Bonus"
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || bonus.get().to_string()
                        on:input=move |ev| bonus.set(event_target_value(&ev).parse().unwrap_or(0.0))
                    />
                </label>
                {move || field_error("bonus")}
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
