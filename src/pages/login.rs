//! Login Screen
//!
//! The only screen reachable without a session. On success the admin is
//! sent to whatever screen the auth gate bounced them from.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::forms::{self, FieldErrors};
use crate::notify::Notifier;
use crate::session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let notifier = expect_context::<Notifier>();
    let store = session::use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let email_value = email.get();
        let password_value = password.get();
        let mut field_errors = FieldErrors::new();
        forms::valid_email("email", &email_value, &mut field_errors);
        forms::required("password", &password_value, &mut field_errors);
        let blocked = !field_errors.is_empty();
        set_errors.set(field_errors);
        if blocked {
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(response) if response.user.role == "admin" => {
                    session::login(&store, response.token.clone(), &response.user);
                    ctx.resume();
                }
                Ok(_) => notifier.error("This console is restricted to administrators"),
                Err(e) => notifier.error(e.to_string()),
            }
            set_submitting.set(false);
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
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h1>"Admin Console"</h1>
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
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                {move || field_error("password")}
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
