//! Application Context
//!
//! Screen switching and app-wide signals provided via Leptos Context API.
//! The console is a single mounted app; which screen is showing is plain
//! state, the browser routing facility stays outside this crate.

use leptos::prelude::*;

/// Admin console screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Users,
    UserDetail(u32),
    Schemes,
    Payments,
    Kyc,
    Products,
    Categories,
    Currency,
    Reports,
    Error,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Sign in",
            Screen::Users => "Users",
            Screen::UserDetail(_) => "User profile",
            Screen::Schemes => "Schemes",
            Screen::Payments => "Payments",
            Screen::Kyc => "KYC review",
            Screen::Products => "Products",
            Screen::Categories => "Categories",
            Screen::Currency => "Currency",
            Screen::Reports => "Reports",
            Screen::Error => "Something went wrong",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently displayed screen - read
    pub screen: ReadSignal<Screen>,
    set_screen: WriteSignal<Screen>,
    /// Screen requested before the auth gate bounced to login
    pub pending_screen: RwSignal<Option<Screen>>,
    /// Message carried into the terminal error screen
    pub error_message: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new(screen: (ReadSignal<Screen>, WriteSignal<Screen>)) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
            pending_screen: RwSignal::new(None),
            error_message: RwSignal::new(None),
        }
    }

    pub fn go_to(&self, screen: Screen) {
        self.set_screen.set(screen);
    }

    /// Remember where the admin was headed, then bounce to login
    pub fn require_login(&self, requested: Screen) {
        self.pending_screen.set(Some(requested));
        self.set_screen.set(Screen::Login);
    }

    /// After login, resume the originally requested screen
    pub fn resume(&self) {
        let target = self.pending_screen.get_untracked().unwrap_or(Screen::Users);
        self.pending_screen.set(None);
        self.set_screen.set(target);
    }

    /// Terminal failure: show the error screen with a message
    pub fn fail(&self, message: String) {
        self.error_message.set(Some(message));
        self.set_screen.set(Screen::Error);
    }
}
