//! KYC Review Screen
//!
//! Pending applications only. Approval is confirm-gated; rejection
//! requires a reason — an empty reason is blocked client-side with a
//! warning and no API call is made.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Modal, Pagination, SearchBar};
use crate::list::{BusySet, ListState, ReloadSeq};
use crate::models::KycApplication;
use crate::notify::Notifier;

const PAGE_SIZE: usize = 10;

fn matches_kyc(app: &KycApplication, term: &str, _filter: &str) -> bool {
    term.is_empty()
        || app.full_name().to_lowercase().contains(term)
        || app.email.to_lowercase().contains(term)
        || app.document_number.to_lowercase().contains(term)
}

#[component]
pub fn KycPage() -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    let list = ListState::<KycApplication>::new(PAGE_SIZE);
    let busy = BusySet::new();
    let seq = ReloadSeq::default();
    let (loading, set_loading) = signal(true);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (viewing, set_viewing) = signal::<Option<KycApplication>>(None);
    let (approving, set_approving) = signal::<Option<KycApplication>>(None);
    let (rejecting, set_rejecting) = signal::<Option<KycApplication>>(None);

    Effect::new({
        let seq = seq.clone();
        move |_| {
            let _ = reload_trigger.get();
            let ticket = seq.begin();
            let seq = seq.clone();
            spawn_local(async move {
                match api::list_pending_kyc().await {
                    Ok(apps) => {
                        if seq.is_current(ticket) {
                            list.load(apps);
                        }
                    }
                    Err(e) => notifier.error(e.to_string()),
                }
                set_loading.set(false);
            });
        }
    });

    let reload = move || set_reload_trigger.update(|v| *v += 1);

    let run_approve = move || {
        let Some(app) = approving.get_untracked() else { return };
        busy.start(app.kyc_id);
        spawn_local(async move {
            let result = api::review_kyc(app.kyc_id, "approved", "").await;
            busy.finish(app.kyc_id);
            match result {
                Ok(()) => {
                    notifier.success(format!("KYC for {} approved", app.full_name()));
                    set_approving.set(None);
                    reload();
                }
                Err(e) => notifier.error(e.to_string()),
            }
        });
    };

    view! {
        <div class="page kyc-page">
            <div class="page-toolbar">
                <SearchBar
                    placeholder="Search by name, email or document number..."
                    value=list.search
                    on_input=Callback::new(move |term| list.set_search(term))
                />
            </div>

            <Show when=move || loading.get()>
                <div class="table-skeleton">"Loading applications..."</div>
            </Show>

            <Show when=move || !loading.get()>
                {move || {
                    let pv = list.view(matches_kyc);
                    if pv.rows.is_empty() {
                        let copy = if list.search.get().trim().is_empty() {
                            "No pending applications. All caught up."
                        } else {
                            "No applications match the current search."
                        };
                        return view! { <div class="empty-state">{copy}</div> }.into_any();
                    }
                    let pages = pv.pages;
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Applicant"</th>
                                    <th>"Email"</th>
                                    <th>"Document"</th>
                                    <th>"Number"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {pv.rows.into_iter().map(|app| {
                                    let id = app.kyc_id;
                                    let row_busy = move || busy.contains(id);
                                    let view_app = app.clone();
                                    let approve_app = app.clone();
                                    let reject_app = app.clone();
                                    view! {
                                        <tr>
                                            <td>{app.full_name()}</td>
                                            <td>{app.email.clone()}</td>
                                            <td>{app.document_type.clone()}</td>
                                            <td>{app.document_number.clone()}</td>
                                            <td class="row-actions">
                                                <button on:click=move |_| set_viewing.set(Some(view_app.clone()))>
                                                    "View"
                                                </button>
                                                <button
                                                    disabled=row_busy
                                                    on:click=move |_| set_approving.set(Some(approve_app.clone()))
                                                >
                                                    {move || if row_busy() { "Processing..." } else { "Approve" }}
                                                </button>
                                                <button
                                                    class="danger-btn"
                                                    disabled=row_busy
                                                    on:click=move |_| set_rejecting.set(Some(reject_app.clone()))
                                                >
                                                    "Reject"
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

            {move || viewing.get().map(|app| view! {
                <Modal
                    title=format!("KYC — {}", app.full_name())
                    on_close=Callback::new(move |_| set_viewing.set(None))
                >
                    <dl class="detail-list">
                        <dt>"Applicant"</dt>
                        <dd>{app.full_name()}</dd>
                        <dt>"Email"</dt>
                        <dd>{app.email.clone()}</dd>
                        <dt>"Document type"</dt>
                        <dd>{app.document_type.clone()}</dd>
                        <dt>"Document number"</dt>
                        <dd>{app.document_number.clone()}</dd>
                    </dl>
                    {app.document_url.clone().map(|url| view! {
                        <a href=url target="_blank" rel="noreferrer">"Open document"</a>
                    })}
                </Modal>
            })}

            {move || approving.get().map(|app| {
                let message = format!("Approve the KYC application from {}?", app.full_name());
                let id = app.kyc_id;
                view! {
                    <Modal title="Approve KYC" on_close=Callback::new(move |_| set_approving.set(None))>
                        <p class="confirm-message">{message}</p>
                        <div class="confirm-actions">
                            <button
                                class="confirm-btn"
                                disabled=move || busy.contains(id)
                                on:click=move |_| run_approve()
                            >
                                {move || if busy.contains(id) { "Processing..." } else { "Approve" }}
                            </button>
                            <button class="cancel-btn" on:click=move |_| set_approving.set(None)>
                                "Cancel"
                            </button>
                        </div>
                    </Modal>
                }
            })}

            {move || rejecting.get().map(|app| view! {
                <RejectForm
                    app=app
                    on_done=Callback::new(move |rejected: bool| {
                        set_rejecting.set(None);
                        if rejected {
                            reload();
                        }
                    })
                />
            })}
        </div>
    }
}

/// Rejection dialog; the reason is mandatory
#[component]
fn RejectForm(app: KycApplication, #[prop(into)] on_done: Callback<bool>) -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    let kyc_id = app.kyc_id;
    let applicant = app.full_name();
    let (reason, set_reason) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let reason_value = reason.get().trim().to_string();
        if reason_value.is_empty() {
            // blocked before any network traffic
            notifier.warning("A rejection reason is required");
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            let result = api::review_kyc(kyc_id, "rejected", &reason_value).await;
            set_submitting.set(false);
            match result {
                Ok(()) => {
                    notifier.success("Application rejected");
                    on_done.run(true);
                }
                Err(e) => notifier.error(e.to_string()),
            }
        });
    };

    view! {
        <Modal
            title=format!("Reject KYC — {}", applicant)
            on_close=Callback::new(move |_| on_done.run(false))
        >
            <form class="modal-form" on:submit=on_submit>
                <label>
                    "Reason"
                    <textarea
                        placeholder="Why is this application being rejected?"
                        prop:value=move || reason.get()
                        on:input=move |ev| set_reason.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="modal-actions">
                    <button type="submit" class="danger-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Rejecting..." } else { "Reject" }}
                    </button>
                    <button type="button" class="cancel-btn" on:click=move |_| on_done.run(false)>
                        "Cancel"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
