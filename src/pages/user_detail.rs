//! User Profile Screen
//!
//! Read-only view over one user's nested collections. Summaries are
//! recomputed from the loaded entity on every render; a reload starts
//! the aggregation from scratch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, Screen};
use crate::detail::{self, progress_pct};
use crate::models::{LedgerEntry, UserDetail};
use crate::notify::Notifier;

#[component]
pub fn UserDetailPage(user_id: u32) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let notifier = expect_context::<Notifier>();

    let (detail, set_detail) = signal::<Option<UserDetail>>(None);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        set_loading.set(true);
        spawn_local(async move {
            match api::user_detail(user_id).await {
                Ok(loaded) => set_detail.set(Some(loaded)),
                Err(e) => notifier.error(e.to_string()),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page user-detail-page">
            <button class="back-btn" on:click=move |_| ctx.go_to(Screen::Users)>
                "← Back to users"
            </button>

            <Show when=move || loading.get()>
                <div class="table-skeleton">"Loading profile..."</div>
            </Show>

            {move || (!loading.get()).then(|| detail.get()).flatten().map(|user| {
                let summary = detail::summarize(&user);
                view! {
                    <div class="profile-header">
                        <h1>{user.full_name()}</h1>
                        <span class=if user.is_active { "badge badge-active" } else { "badge badge-inactive" }>
                            {if user.is_active { "Active" } else { "Inactive" }}
                        </span>
                        <div class="profile-contact">
                            <span>{user.email.clone()}</span>
                            <span>{user.mobile.clone()}</span>
                        </div>
                    </div>

                    <div class="stat-cards">
                        <div class="stat-card">
                            <span class="stat-value">{summary.scheme_count}</span>
                            <span class="stat-label">"Schemes"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{format!("{:.2}", summary.scheme_saved)}</span>
                            <span class="stat-label">"Saved in schemes"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{summary.aim_count}</span>
                            <span class="stat-label">"Aims"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{format!("{:.2}", summary.aim_saved)}</span>
                            <span class="stat-label">"Saved in aims"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">
                                {summary.wallet_balance
                                    .map(|b| format!("{:.2}", b))
                                    .unwrap_or_else(|| "N/A".to_string())}
                            </span>
                            <span class="stat-label">"Wallet balance"</span>
                        </div>
                    </div>

                    <section class="detail-section">
                        <h2>"Schemes"</h2>
                        {if user.schemes.is_empty() {
                            view! { <div class="empty-state">"Not enrolled in any scheme."</div> }.into_any()
                        } else {
                            view! { <div class="nested-list">{user.schemes.iter().map(|scheme| {
                                let pct = progress_pct(scheme.payments.len(), scheme.months);
                                view! {
                                    <div class="nested-card">
                                        <div class="nested-card-header">
                                            <span class="nested-card-title">{scheme.name.clone()}</span>
                                            <span>{format!(
                                                "{} / {} payments ({}%)",
                                                scheme.payments.len(),
                                                scheme.months,
                                                pct
                                            )}</span>
                                        </div>
                                        <div class="progress-track">
                                            <div class="progress-fill" style=format!("width: {}%;", pct)></div>
                                        </div>
                                        <dl class="detail-list">
                                            <dt>"Total amount"</dt>
                                            <dd>{detail::money_display(&scheme.amount)}</dd>
                                            <dt>"Monthly pay"</dt>
                                            <dd>{detail::money_display(&scheme.monthly_pay)}</dd>
                                            <dt>"Paid so far"</dt>
                                            <dd>{format!("{:.2}", detail::sum_ledger(&scheme.payments))}</dd>
                                        </dl>
                                        <Ledger entries=scheme.payments.clone()/>
                                    </div>
                                }
                            }).collect_view()}</div> }.into_any()
                        }}
                    </section>

                    <section class="detail-section">
                        <h2>"Aims"</h2>
                        {if user.aims.is_empty() {
                            view! { <div class="empty-state">"No savings aims."</div> }.into_any()
                        } else {
                            view! { <div class="nested-list">{user.aims.iter().map(|aim| view! {
                                <div class="nested-card">
                                    <div class="nested-card-header">
                                        <span class="nested-card-title">{aim.name.clone()}</span>
                                        <span>{format!("target {}", detail::money_display(&aim.target_amount))}</span>
                                    </div>
                                    <dl class="detail-list">
                                        <dt>"Saved"</dt>
                                        <dd>{format!("{:.2}", detail::sum_ledger(&aim.payments))}</dd>
                                    </dl>
                                    <Ledger entries=aim.payments.clone()/>
                                </div>
                            }).collect_view()}</div> }.into_any()
                        }}
                    </section>

                    <section class="detail-section">
                        <h2>"Wallet"</h2>
                        {match &user.wallet {
                            None => view! { <div class="empty-state">"No wallet."</div> }.into_any(),
                            Some(wallet) => view! {
                                <div class="nested-card">
                                    <div class="nested-card-header">
                                        <span class="nested-card-title">"Balance"</span>
                                        <span>{detail::money_display(&wallet.balance)}</span>
                                    </div>
                                    <Ledger entries=wallet.payments.clone()/>
                                </div>
                            }.into_any(),
                        }}
                    </section>
                }
            })}
        </div>
    }
}

/// Payment history table shared by schemes, aims, and the wallet
#[component]
fn Ledger(entries: Vec<LedgerEntry>) -> impl IntoView {
    if entries.is_empty() {
        return view! { <div class="empty-state">"No payments recorded."</div> }.into_any();
    }
    view! {
        <table class="ledger-table">
            <thead>
                <tr>
                    <th>"Amount"</th>
                    <th>"Status"</th>
                    <th>"Date"</th>
                </tr>
            </thead>
            <tbody>
                {entries.into_iter().map(|entry| view! {
                    <tr>
                        <td>{detail::money_display(&entry.amount)}</td>
                        <td>{entry.status.clone().unwrap_or_else(|| "N/A".to_string())}</td>
                        <td>{entry.created_at.clone().unwrap_or_else(|| "N/A".to_string())}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
