//! Notification Emitter
//!
//! Single-slot transient status banner. A new notice replaces the current
//! one; every notice auto-dismisses after its timeout. A generation
//! counter keeps a superseded notice's timer from clearing its successor.

use leptos::prelude::*;

pub const DEFAULT_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NoticeKind {
    pub fn css(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Warning => "warning",
            NoticeKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// App-wide notifier, provided via context
#[derive(Clone, Copy)]
pub struct Notifier {
    slot: RwSignal<Option<Notice>>,
    generation: RwSignal<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    pub fn current(&self) -> Option<Notice> {
        self.slot.get()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NoticeKind::Success, message, DEFAULT_TIMEOUT_MS);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NoticeKind::Error, message, DEFAULT_TIMEOUT_MS);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(NoticeKind::Warning, message, DEFAULT_TIMEOUT_MS);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(NoticeKind::Info, message, DEFAULT_TIMEOUT_MS);
    }

    /// Post a notice with an explicit timeout (the products screen uses a
    /// shorter one than the default).
    pub fn show(&self, kind: NoticeKind, message: impl Into<String>, timeout_ms: u32) {
        let ticket = self.generation.get_untracked() + 1;
        self.generation.set(ticket);
        self.slot.set(Some(Notice {
            kind,
            message: message.into(),
        }));

        #[cfg(target_arch = "wasm32")]
        {
            let slot = self.slot;
            let generation = self.generation;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(timeout_ms).await;
                // only the latest notice's timer may clear the slot
                if generation.get_untracked() == ticket {
                    slot.set(None);
                }
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = timeout_ms;
    }

    pub fn dismiss(&self) {
        self.slot.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_notice_replaces_first() {
        let notifier = Notifier::new();
        notifier.success("saved");
        notifier.error("failed");
        let current = notifier.current().unwrap();
        assert_eq!(current.kind, NoticeKind::Error);
        assert_eq!(current.message, "failed");
    }

    #[test]
    fn test_generation_advances_per_notice() {
        let notifier = Notifier::new();
        notifier.info("one");
        let first = notifier.generation.get_untracked();
        notifier.info("two");
        let second = notifier.generation.get_untracked();
        // the first notice's dismiss ticket is stale once a second posts
        assert!(second > first);
    }

    #[test]
    fn test_dismiss_clears_slot() {
        let notifier = Notifier::new();
        notifier.warning("heads up");
        notifier.dismiss();
        assert!(notifier.current().is_none());
    }
}
