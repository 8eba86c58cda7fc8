//! Currency Screen
//!
//! AED spot rate plus the currency config entries. The rate refreshes
//! periodically while the screen is mounted; the interval is dropped on
//! unmount so nothing ticks against a dead screen.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::forms::{self, FieldErrors};
use crate::models::{AedRate, ConfigEntry};
use crate::notify::Notifier;

const REFRESH_MS: u32 = 60_000;

#[component]
pub fn CurrencyPage() -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    let (rate, set_rate) = signal::<Option<AedRate>>(None);
    let (entries, set_entries) = signal(Vec::<ConfigEntry>::new());
    let (loading, set_loading) = signal(true);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (rate_input, set_rate_input) = signal(0.0f64);
    let (errors, set_errors) = signal(FieldErrors::new());
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            match api::get_aed_rate().await {
                Ok(loaded) => set_rate.set(Some(loaded)),
                Err(e) => notifier.error(e.to_string()),
            }
            if let Ok(config) = api::list_config().await {
                set_entries.set(config);
            }
            set_loading.set(false);
        });
    });

    // spot-rate style periodic refresh, self-cancelling on unmount
    let mounted = Arc::new(AtomicBool::new(true));
    {
        let mounted = mounted.clone();
        spawn_local(async move {
            loop {
                TimeoutFuture::new(REFRESH_MS).await;
                if !mounted.load(Ordering::Relaxed) {
                    break;
                }
                set_reload_trigger.update(|v| *v += 1);
            }
        });
    }
    on_cleanup(move || mounted.store(false, Ordering::Relaxed));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let mut field_errors = FieldErrors::new();
        forms::positive_number("rate", rate_input.get(), &mut field_errors);
        let blocked = !field_errors.is_empty();
        set_errors.set(field_errors);
        if blocked {
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            match api::set_aed_rate(rate_input.get_untracked()).await {
                Ok(updated) => {
                    notifier.success(format!("AED rate updated to {:.4}", updated.rate));
                    set_rate.set(Some(updated));
                }
                Err(e) => notifier.error(e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page currency-page">
            <Show when=move || loading.get()>
                <div class="table-skeleton">"Loading rates..."</div>
            </Show>

            <Show when=move || !loading.get()>
                <div class="rate-card">
                    <span class="stat-label">"Current AED rate"</span>
                    <span class="stat-value">
                        {move || rate.get()
                            .map(|r| format!("{:.4}", r.rate))
                            .unwrap_or_else(|| "N/A".to_string())}
                    </span>
                    <span class="rate-updated">
                        {move || rate.get()
                            .and_then(|r| r.updated_at)
                            .map(|at| format!("updated {}", at))
                            .unwrap_or_default()}
                    </span>
                </div>

                <form class="rate-form" on:submit=on_submit>
                    <label>
                        "New rate"
                        <input
                            type="number"
                            min="0"
                            step="0.0001"
                            prop:value=move || rate_input.get().to_string()
                            on:input=move |ev| set_rate_input.set(event_target_value(&ev).parse().unwrap_or(0.0))
                        />
                    </label>
                    {move || errors.get().get("rate").cloned().map(|message| view! {
                        <span class="field-error">{message}</span>
                    })}
                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Updating..." } else { "Update rate" }}
                    </button>
                </form>

                <section class="detail-section">
                    <h2>"Configuration"</h2>
                    {move || {
                        let config = entries.get();
                        if config.is_empty() {
                            return view! { <div class="empty-state">"No configuration entries."</div> }.into_any();
                        }
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Key"</th>
                                        <th>"Value"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {config.into_iter().map(|entry| view! {
                                        <tr>
                                            <td>{entry.key.clone()}</td>
                                            <td>{entry.value.clone()}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }}
                </section>
            </Show>
        </div>
    }
}
