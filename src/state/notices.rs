//! Transient user-facing notices.
//!
//! This is the notification port the rest of the crate emits through;
//! the `Toasts` component is the presentation-side consumer. Emission is
//! fire-and-forget and never blocks the caller.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use leptos::prelude::*;

/// How long a notice stays up before auto-dismissing.
pub const DISMISS_AFTER_MS: u64 = 3_000;

/// Severity of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

/// A single transient notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub kind: NoticeKind,
    pub message: String,
}

/// Queue of active notices, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticesState {
    pub items: Vec<Notice>,
}

impl NoticesState {
    /// Append a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Notice { id: id.clone(), kind, message: message.into() });
        id
    }

    /// Remove a notice by id; no-op when it already left the queue.
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }
}

/// Push a notice and arm its auto-dismiss timer.
pub fn notify(notices: RwSignal<NoticesState>, kind: NoticeKind, message: impl Into<String>) {
    let mut pushed = String::new();
    notices.update(|n| pushed = n.push(kind, message.into()));
    #[cfg(feature = "csr")]
    schedule_dismiss(notices, pushed);
    #[cfg(not(feature = "csr"))]
    let _ = pushed;
}

/// Dismiss `id` after the standard delay.
#[cfg(feature = "csr")]
pub(crate) fn schedule_dismiss(notices: RwSignal<NoticesState>, id: String) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(DISMISS_AFTER_MS)).await;
        notices.update(|n| n.dismiss(&id));
    });
}
