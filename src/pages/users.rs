//! Users Screen
//!
//! Search over name/email/mobile, status filter, windowed pagination, and
//! the create/edit/block/delete actions. Every mutation reloads the list
//! from the server; rows are never patched in place.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    ConfirmDialog, ConfirmIntent, ConfirmKind, Modal, ModalMode, Pagination, SearchBar,
};
use crate::context::{AppContext, Screen};
use crate::forms::{self, FieldErrors};
use crate::list::{BusySet, ListState, ReloadSeq};
use crate::models::{RegisterUser, User, UserUpdate};
use crate::notify::Notifier;

const PAGE_SIZE: usize = 10;

fn matches_user(user: &User, term: &str, filter: &str) -> bool {
    let in_search = term.is_empty()
        || user.full_name().to_lowercase().contains(term)
        || user.email.to_lowercase().contains(term)
        || user.mobile.contains(term);
    let in_filter = match filter {
        "active" => user.is_active,
        "inactive" => !user.is_active,
        _ => true,
    };
    in_search && in_filter
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let notifier = expect_context::<Notifier>();

    let list = ListState::<User>::new(PAGE_SIZE);
    let busy = BusySet::new();
    let seq = ReloadSeq::default();
    let (loading, set_loading) = signal(true);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (modal, set_modal) = signal::<Option<ModalMode<User>>>(None);
    let (confirming, set_confirming) = signal::<Option<ConfirmIntent<User>>>(None);
    let (confirm_busy, set_confirm_busy) = signal(false);

    Effect::new({
        let seq = seq.clone();
        move |_| {
            let _ = reload_trigger.get();
            let ticket = seq.begin();
            let seq = seq.clone();
            spawn_local(async move {
                match api::list_users().await {
                    Ok(users) => {
                        if seq.is_current(ticket) {
                            list.load(users);
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
        busy.start(intent.target.id);
        spawn_local(async move {
            let result = match intent.kind {
                ConfirmKind::Delete => api::delete_user(intent.target.id).await,
                ConfirmKind::Block => api::set_user_blocked(intent.target.id, true).await,
                ConfirmKind::Unblock => api::set_user_blocked(intent.target.id, false).await,
            };
            busy.finish(intent.target.id);
            set_confirm_busy.set(false);
            match result {
                Ok(()) => {
                    let verb = match intent.kind {
                        ConfirmKind::Delete => "deleted",
                        ConfirmKind::Block => "blocked",
                        ConfirmKind::Unblock => "unblocked",
                    };
                    notifier.success(format!("{} was {}", intent.target.full_name(), verb));
                    set_confirming.set(None);
                    reload();
                }
                Err(e) => notifier.error(e.to_string()),
            }
        });
    };

    view! {
        <div class="page users-page">
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
                    <option value="">"All statuses"</option>
                    <option value="active">"Active"</option>
                    <option value="inactive">"Inactive"</option>
                </select>
                <button class="primary-btn" on:click=move |_| set_modal.set(Some(ModalMode::Create))>
                    "Add user"
                </button>
            </div>

            <Show when=move || loading.get()>
                <div class="table-skeleton">"Loading users..."</div>
            </Show>

            <Show when=move || !loading.get()>
                {move || {
                    let pv = list.view(matches_user);
                    if pv.rows.is_empty() {
                        let searching = !list.search.get().trim().is_empty()
                            || !list.filter.get().is_empty();
                        let copy = if searching {
                            "No users match the current search."
                        } else {
                            "No users yet."
                        };
                        return view! { <div class="empty-state">{copy}</div> }.into_any();
                    }
                    let pages = pv.pages;
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Mobile"</th>
                                    <th>"Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {pv.rows.into_iter().map(|user| {
                                    let id = user.id;
                                    let is_active = user.is_active;
                                    let row_busy = move || busy.contains(id);
                                    let edit_user = user.clone();
                                    let toggle_user = user.clone();
                                    let delete_user = user.clone();
                                    view! {
                                        <tr>
                                            <td>{user.full_name()}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>{user.mobile.clone()}</td>
                                            <td>
                                                <span class=if is_active { "badge badge-active" } else { "badge badge-inactive" }>
                                                    {if is_active { "Active" } else { "Inactive" }}
                                                </span>
                                            </td>
                                            <td class="row-actions">
                                                <button on:click=move |_| ctx.go_to(Screen::UserDetail(id))>
                                                    "View"
                                                </button>
                                                <button
                                                    disabled=row_busy
                                                    on:click=move |_| set_modal.set(Some(ModalMode::Edit(edit_user.clone())))
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    disabled=row_busy
                                                    on:click=move |_| {
                                                        let kind = if is_active { ConfirmKind::Block } else { ConfirmKind::Unblock };
                                                        set_confirming.set(Some(ConfirmIntent { kind, target: toggle_user.clone() }));
                                                    }
                                                >
                                                    {move || if row_busy() {
                                                        "Processing..."
                                                    } else if is_active {
                                                        "Block"
                                                    } else {
                                                        "Unblock"
                                                    }}
                                                </button>
                                                <button
                                                    class="danger-btn"
                                                    disabled=row_busy
                                                    on:click=move |_| set_confirming.set(Some(ConfirmIntent {
                                                        kind: ConfirmKind::Delete,
                                                        target: delete_user.clone(),
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
                <UserForm
                    mode=mode
                    on_done=Callback::new(move |saved: bool| {
                        set_modal.set(None);
                        if saved {
                            reload();
                        }
                    })
                />
            })}

            {move || confirming.get().map(|intent| {
                let title = format!("{} user", intent.kind.verb());
                let message = format!(
                    "{} {}? This cannot be undone from here.",
                    intent.kind.verb(),
                    intent.target.full_name()
                );
                view! {
                    <ConfirmDialog
                        title=title
                        message=message
                        busy=confirm_busy
                        on_confirm=Callback::new(move |_| run_confirm())
                        on_cancel=Callback::new(move |_| set_confirming.set(None))
                    />
                }
            })}
        </div>
    }
}

/// Create/edit form hosted by the users screen's modal slot
#[component]
fn UserForm(mode: ModalMode<User>, #[prop(into)] on_done: Callback<bool>) -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    let editing = match &mode {
        ModalMode::Edit(user) | ModalMode::View(user) => Some(user.clone()),
        ModalMode::Create => None,
    };
    let is_edit = editing.is_some();
    let title = if is_edit { "Edit user" } else { "Add user" };
    let existing_id = editing.as_ref().map(|u| u.id);

    let (first_name, set_first_name) = signal(editing.as_ref().map(|u| u.first_name.clone()).unwrap_or_default());
    let (last_name, set_last_name) = signal(editing.as_ref().map(|u| u.last_name.clone()).unwrap_or_default());
    let (email, set_email) = signal(editing.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let (mobile, set_mobile) = signal(editing.as_ref().map(|u| u.mobile.clone()).unwrap_or_default());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let mut field_errors = FieldErrors::new();
        forms::required("first_name", &first_name.get(), &mut field_errors);
        forms::required("last_name", &last_name.get(), &mut field_errors);
        forms::valid_email("email", &email.get(), &mut field_errors);
        forms::required("mobile", &mobile.get(), &mut field_errors);
        if !is_edit {
            forms::required("password", &password.get(), &mut field_errors);
        }
        let blocked = !field_errors.is_empty();
        set_errors.set(field_errors);
        if blocked {
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            let result = match existing_id {
                Some(id) => api::update_user(&UserUpdate {
                    id,
                    first_name: first_name.get_untracked(),
                    last_name: last_name.get_untracked(),
                    email: email.get_untracked(),
                    mobile: mobile.get_untracked(),
                })
                .await
                .map(|_| ()),
                None => api::register(&RegisterUser {
                    first_name: first_name.get_untracked(),
                    last_name: last_name.get_untracked(),
                    email: email.get_untracked(),
                    mobile: mobile.get_untracked(),
                    password: password.get_untracked(),
                })
                .await,
            };
            set_submitting.set(false);
            match result {
                Ok(()) => {
                    notifier.success(if existing_id.is_some() {
                        "User updated"
                    } else {
                        "User created"
                    });
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
                    "First name"
                    <input
                        type="text"
                        prop:value=move || first_name.get()
                        on:input=move |ev| set_first_name.set(event_target_value(&ev))
                    />
                </label>
                {move || field_error("first_name")}
                <label>
                    "Last name"
                    <input
                        type="text"
                        prop:value=move || last_name.get()
                        on:input=move |ev| set_last_name.set(event_target_value(&ev))
                    />
                </label>
                {move || field_error("last_name")}
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                {move || field_error("email")}
                <label>
                    "Mobile"
                    <input
                        type="tel"
                        prop:value=move || mobile.get()
                        on:input=move |ev| set_mobile.set(event_target_value(&ev))
                    />
                </label>
                {move || field_error("mobile")}
                <Show when=move || !is_edit>
                    <label>
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>
                    {move || field_error("password")}
                </Show>
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
