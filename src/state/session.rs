//! Session token store and auth gate.
//!
//! Wraps the single persisted bearer token: set on sign-in, cleared on
//! explicit logout, never expired client-side. The token is opaque; the
//! server alone judges validity by rejecting requests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use super::notices::{NoticeKind, NoticesState};

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "token";

/// Denial message for guarded actions attempted anonymously.
pub const SIGN_IN_REQUIRED: &str = "You need to sign in to perform this action.";

/// The current session: a persisted token, or absent for anonymous
/// visitors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
}

impl SessionState {
    /// Restore the persisted token from `localStorage`; anonymous in a
    /// non-browser build.
    pub fn load() -> Self {
        Self { token: read_token() }
    }

    pub fn is_signed_in(&self) -> bool {
        authorize(self.token.as_deref())
    }

    /// Record a successful sign-in. The token survives reloads.
    pub fn sign_in(&mut self, token: String) {
        write_token(&token);
        self.token = Some(token);
    }

    /// Explicit logout: forget the token locally.
    pub fn sign_out(&mut self) {
        clear_token();
        self.token = None;
    }
}

/// True iff a token is present and non-empty.
pub fn authorize(token: Option<&str>) -> bool {
    token.is_some_and(|t| !t.is_empty())
}

/// The auth gate: returns whether a protected action may proceed.
/// Denial pushes exactly one notice; callers must abort the action.
pub fn gate(session: &SessionState, notices: &mut NoticesState) -> bool {
    if session.is_signed_in() {
        true
    } else {
        notices.push(NoticeKind::Error, SIGN_IN_REQUIRED);
        false
    }
}

/// Signal-level gate for pages: [`gate`], with the denial notice
/// auto-dismissing after the usual delay.
pub fn require_signed_in(
    session: RwSignal<SessionState>,
    notices: RwSignal<NoticesState>,
) -> bool {
    let current = session.get_untracked();
    let mut allowed = true;
    notices.maybe_update(|n| {
        allowed = gate(&current, n);
        if allowed {
            return false;
        }
        #[cfg(feature = "csr")]
        if let Some(denial) = n.items.last() {
            super::notices::schedule_dismiss(notices, denial.id.clone());
        }
        true
    });
    allowed
}

fn read_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

fn write_token(token: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

fn clear_token() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
