//! Admin Console App
//!
//! Root component: session bootstrap, the auth gate, chrome (header and
//! nav rail), the single notification slot, and screen switching.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::NotificationBanner;
use crate::context::{AppContext, Screen};
use crate::notify::Notifier;
use crate::pages::{
    CategoriesPage, CurrencyPage, ErrorPage, KycPage, LoginPage, PaymentsPage, ProductsPage,
    ReportsPage, SchemesPage, UserDetailPage, UsersPage,
};
use crate::session::{self, SessionState, SessionStateStoreFields};

const NAV: &[(Screen, &str)] = &[
    (Screen::Users, "Users"),
    (Screen::Schemes, "Schemes"),
    (Screen::Payments, "Payments"),
    (Screen::Kyc, "KYC review"),
    (Screen::Products, "Products"),
    (Screen::Categories, "Categories"),
    (Screen::Currency, "Currency"),
    (Screen::Reports, "Reports"),
];

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(SessionState::default());
    session::init(&store);
    provide_context(store);

    let (screen, set_screen) = signal(Screen::Users);
    let ctx = AppContext::new((screen, set_screen));
    provide_context(ctx);
    provide_context(Notifier::new());

    // Auth gate: everything but login requires an admin session. The
    // requested screen is kept for the post-login redirect.
    Effect::new(move |_| {
        let requested = screen.get();
        if requested != Screen::Login && !session::is_admin(&store) {
            ctx.require_login(requested);
        }
    });

    let on_logout = move |_| {
        // server-side invalidation is best-effort; the local session is
        // cleared either way
        if let Some(user_id) = store.user_id().get_untracked() {
            spawn_local(async move {
                if let Err(e) = api::logout(user_id).await {
                    web_sys::console::warn_1(&format!("[APP] Logout call failed: {}", e).into());
                }
            });
        }
        session::logout(&store);
        ctx.go_to(Screen::Login);
    };

    view! {
        <Show when=move || screen.get() == Screen::Login>
            <NotificationBanner/>
            <LoginPage/>
        </Show>
        <Show when=move || screen.get() != Screen::Login>
            <div class="app-layout">
                <nav class="nav-rail">
                    <div class="brand">"Savings Admin"</div>
                    {NAV.iter().map(|(target, label)| {
                        let target = *target;
                        let is_active = move || screen.get() == target;
                        view! {
                            <button
                                class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                                on:click=move |_| ctx.go_to(target)
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </nav>

                <div class="main-column">
                    <header class="top-bar">
                        <h2 class="screen-title">{move || screen.get().title()}</h2>
                        <div class="session-info">
                            <span>{move || store.name().get().unwrap_or_default()}</span>
                            <button class="logout-btn" on:click=on_logout>"Log out"</button>
                        </div>
                    </header>

                    <NotificationBanner/>

                    <main class="screen-host">
                        {move || match screen.get() {
                            Screen::Login => view! { <LoginPage/> }.into_any(),
                            Screen::Users => view! { <UsersPage/> }.into_any(),
                            Screen::UserDetail(id) => view! { <UserDetailPage user_id=id/> }.into_any(),
                            Screen::Schemes => view! { <SchemesPage/> }.into_any(),
                            Screen::Payments => view! { <PaymentsPage/> }.into_any(),
                            Screen::Kyc => view! { <KycPage/> }.into_any(),
                            Screen::Products => view! { <ProductsPage/> }.into_any(),
                            Screen::Categories => view! { <CategoriesPage/> }.into_any(),
                            Screen::Currency => view! { <CurrencyPage/> }.into_any(),
                            Screen::Reports => view! { <ReportsPage/> }.into_any(),
                            Screen::Error => view! { <ErrorPage/> }.into_any(),
                        }}
                    </main>
                </div>
            </div>
        </Show>
    }
}
