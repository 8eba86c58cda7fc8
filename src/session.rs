//! Session Store
//!
//! Process-wide auth state with an explicit init/login/logout lifecycle.
//! The reactive copy (a `Store`) drives the UI; durable browser storage
//! keeps the session across page loads; a token cache feeds the API
//! layer. Only the login flow and the logout action mutate this.

use std::cell::RefCell;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::LoginUser;

const KEY_TOKEN: &str = "adminToken";
const KEY_USER_ID: &str = "userId";
const KEY_USER_NAME: &str = "userName";
const KEY_USER_EMAIL: &str = "userEmail";
const KEY_USER_ROLE: &str = "userRole";

/// Reactive session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    pub token: Option<String>,
    pub user_id: Option<u32>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

pub type SessionStore = Store<SessionState>;

pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

thread_local! {
    // token mirror for the (non-reactive) API layer
    static TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
}

pub(crate) fn auth_token() -> Option<String> {
    TOKEN.with(|t| t.borrow().clone())
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Hydrate the store from durable storage at startup
pub fn init(store: &SessionStore) {
    let Some(storage) = storage() else { return };
    let read = |key: &str| storage.get_item(key).ok().flatten();

    let token = read(KEY_TOKEN);
    TOKEN.with(|t| *t.borrow_mut() = token.clone());
    store.token().set(token);
    store
        .user_id()
        .set(read(KEY_USER_ID).and_then(|v| v.parse().ok()));
    store.name().set(read(KEY_USER_NAME));
    store.email().set(read(KEY_USER_EMAIL));
    store.role().set(read(KEY_USER_ROLE));
}

/// Record a successful login: in-memory and durable copies together
pub fn login(store: &SessionStore, token: String, user: &LoginUser) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(KEY_TOKEN, &token);
        let _ = storage.set_item(KEY_USER_ID, &user.id.to_string());
        let _ = storage.set_item(KEY_USER_NAME, &user.name);
        let _ = storage.set_item(KEY_USER_EMAIL, &user.email);
        let _ = storage.set_item(KEY_USER_ROLE, &user.role);
    }
    TOKEN.with(|t| *t.borrow_mut() = Some(token.clone()));
    store.token().set(Some(token));
    store.user_id().set(Some(user.id));
    store.name().set(Some(user.name.clone()));
    store.email().set(Some(user.email.clone()));
    store.role().set(Some(user.role.clone()));
}

/// Clear both copies; all keys go together
pub fn logout(store: &SessionStore) {
    if let Some(storage) = storage() {
        for key in [KEY_TOKEN, KEY_USER_ID, KEY_USER_NAME, KEY_USER_EMAIL, KEY_USER_ROLE] {
            let _ = storage.remove_item(key);
        }
    }
    TOKEN.with(|t| *t.borrow_mut() = None);
    store.token().set(None);
    store.user_id().set(None);
    store.name().set(None);
    store.email().set(None);
    store.role().set(None);
}

/// Every screen but login is gated on this
pub fn is_admin(store: &SessionStore) -> bool {
    store.token().get().is_some() && store.role().get().as_deref() == Some("admin")
}
