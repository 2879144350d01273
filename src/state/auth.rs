//! Session state and its pure transitions.
//!
//! DESIGN
//! ======
//! Transitions never touch storage themselves: each returns the next state
//! plus the effects the store task must run afterwards. That keeps the
//! container a value type tests can drive without any I/O. Every transition
//! fully determines the next state, so they are constructors rather than
//! methods on the previous state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Serialize;

/// Request lifecycle marker shared by the session and profile containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Storage side effects a transition asks the store task to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Remove the persisted session token, but only if one is present.
    ClearPersistedToken,
}

/// Who is signed in and how the last attempt ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub status: Status,
    pub error: Option<String>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

impl AuthState {
    /// Signed-out state: no token, no error, idle.
    #[must_use]
    pub fn new() -> Self {
        Self { status: Status::Idle, error: None, token: None, is_authenticated: false }
    }

    /// State rebuilt from a persisted token. The session is trusted until
    /// the API rejects it.
    #[must_use]
    pub fn restored(token: String) -> Self {
        Self { status: Status::Idle, error: None, token: Some(token), is_authenticated: true }
    }

    /// A login round trip returned a token.
    #[must_use]
    pub fn with_credentials(token: String) -> (Self, Vec<Effect>) {
        let next =
            Self { status: Status::Succeeded, error: None, token: Some(token), is_authenticated: true };
        (next, Vec::new())
    }

    /// The session ended locally. Any persisted token goes with it.
    #[must_use]
    pub fn logged_out() -> (Self, Vec<Effect>) {
        (Self::new(), vec![Effect::ClearPersistedToken])
    }

    /// A login round trip failed; `message` is the text the UI shows. A
    /// stale persisted token from an earlier session is removed too.
    #[must_use]
    pub fn login_failed(message: String) -> (Self, Vec<Effect>) {
        let next =
            Self { status: Status::Failed, error: Some(message), token: None, is_authenticated: false };
        (next, vec![Effect::ClearPersistedToken])
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
