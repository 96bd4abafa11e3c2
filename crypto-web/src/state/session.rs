//! Session signal derived from request outcomes.
//!
//! The access credential lives in an HttpOnly cookie and is never visible
//! here; this only records what the server last told us.

use std::cell::Cell;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// No authenticated request has completed yet.
    #[default]
    Unknown,
    /// The last authenticated request succeeded.
    Authenticated,
    /// The server answered 401, or the user logged out.
    Expired,
}

#[derive(Debug, Default)]
pub struct SessionState {
    status: Cell<AuthStatus>,
}

impl SessionState {
    pub fn status(&self) -> AuthStatus {
        self.status.get()
    }

    pub fn is_authenticated_or_unknown(&self) -> bool {
        self.status.get() != AuthStatus::Expired
    }

    pub(crate) fn record_success(&self) {
        self.status.set(AuthStatus::Authenticated);
    }

    pub(crate) fn record_expired(&self) {
        self.status.set(AuthStatus::Expired);
    }
}
