//! Payments Screen
//!
//! Payment list with search, an exact-match payment-type filter, and
//! per-row status updates. One row's in-flight update leaves the other
//! rows interactive.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Pagination, SearchBar};
use crate::list::{BusySet, ListState, ReloadSeq};
use crate::models::Payment;
use crate::notify::Notifier;

const PAGE_SIZE: usize = 10;

const PAYMENT_TYPES: &[&str] = &["scheme", "aim", "wallet"];

fn matches_payment(payment: &Payment, term: &str, filter: &str) -> bool {
    let in_search = term.is_empty()
        || payment.full_name().to_lowercase().contains(term)
        || payment.email.to_lowercase().contains(term)
        || payment.mobile.contains(term);
    // the type filter is an exact match, not a substring
    let in_filter = filter.is_empty() || payment.payment_type == filter;
    in_search && in_filter
}

#[component]
pub fn PaymentsPage() -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    let list = ListState::<Payment>::new(PAGE_SIZE);
    let busy = BusySet::new();
    let seq = ReloadSeq::default();
    let (loading, set_loading) = signal(true);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    Effect::new({
        let seq = seq.clone();
        move |_| {
            let _ = reload_trigger.get();
            let ticket = seq.begin();
            let seq = seq.clone();
            spawn_local(async move {
                match api::list_payments().await {
                    Ok(payments) => {
                        if seq.is_current(ticket) {
                            list.load(payments);
                        }
                    }
                    Err(e) => notifier.error(e.to_string()),
                }
                set_loading.set(false);
            });
        }
    });

    let reload = move || set_reload_trigger.update(|v| *v += 1);

    let set_status = move |id: u32, status: &'static str| {
        busy.start(id);
        spawn_local(async move {
            let result = api::update_payment_status(id, status).await;
            busy.finish(id);
            match result {
                Ok(()) => {
                    notifier.success(format!("Payment #{} marked {}", id, status));
                    reload();
                }
                Err(e) => notifier.error(e.to_string()),
            }
        });
    };

    view! {
        <div class="page payments-page">
            <div class="page-toolbar">
                <SearchBar
                    placeholder="Search by name, email or mobile..."
                    value=list.search
                    on_input=Callback::new(move |term| list.set_search(term))
                />
                <select
                    class="filter-select"
                    on:change=move |ev| list.set_filter(event_target_value(&ev))
                >
                    <option value="">"All types"</option>
                    {PAYMENT_TYPES.iter().map(|t| view! {
                        <option value=*t>{*t}</option>
                    }).collect_view()}
                </select>
            </div>

            <Show when=move || loading.get()>
                <div class="table-skeleton">"Loading payments..."</div>
            </Show>

            <Show when=move || !loading.get()>
                {move || {
                    let pv = list.view(matches_payment);
                    if pv.rows.is_empty() {
                        let searching = !list.search.get().trim().is_empty()
                            || !list.filter.get().is_empty();
                        let copy = if searching {
                            "No payments match the current search."
                        } else {
                            "No payments recorded yet."
                        };
                        return view! { <div class="empty-state">{copy}</div> }.into_any();
                    }
                    let pages = pv.pages;
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"User"</th>
                                    <th>"Email"</th>
                                    <th>"Amount"</th>
                                    <th>"Type"</th>
                                    <th>"Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {pv.rows.into_iter().map(|payment| {
                                    let id = payment.id;
                                    let row_busy = move || busy.contains(id);
                                    let pending = payment.status == "pending";
                                    view! {
                                        <tr>
                                            <td>{payment.full_name()}</td>
                                            <td>{payment.email.clone()}</td>
                                            <td>{format!("{:.2}", payment.amount)}</td>
                                            <td>{payment.payment_type.clone()}</td>
                                            <td>
                                                <span class=format!("badge badge-{}", payment.status)>
                                                    {payment.status.clone()}
                                                </span>
                                            </td>
                                            <td class="row-actions">
                                                <Show when=move || pending>
                                                    <button
                                                        disabled=row_busy
                                                        on:click=move |_| set_status(id, "success")
                                                    >
                                                        {move || if row_busy() { "Processing..." } else { "Approve" }}
                                                    </button>
                                                    <button
                                                        class="danger-btn"
                                                        disabled=row_busy
                                                        on:click=move |_| set_status(id, "failed")
                                                    >
                                                        "Decline"
                                                    </button>
                                                </Show>
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
        </div>
    }
}
