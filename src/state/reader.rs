//! Read hooks — the presentation-facing view of the store.
//!
//! DESIGN
//! ======
//! One accessor per field the UI renders, over the store's published
//! snapshots, with no way to mutate state or trigger fetches from here.
//! `changed` awaits the next publication from either container, giving
//! presentation code a reactive wait primitive.

#[cfg(test)]
#[path = "reader_test.rs"]
mod reader_test;

use tokio::sync::watch;

use crate::error::Error;
use crate::net::types::UserProfile;
use crate::state::auth::{AuthState, Status};
use crate::state::user::UserState;

/// Cloneable, read-only view over the session and profile snapshots.
#[derive(Clone)]
pub struct StateReader {
    auth_rx: watch::Receiver<AuthState>,
    user_rx: watch::Receiver<UserState>,
}

impl StateReader {
    pub(crate) fn new(
        auth_rx: watch::Receiver<AuthState>,
        user_rx: watch::Receiver<UserState>,
    ) -> Self {
        Self { auth_rx, user_rx }
    }

    // =========================================================================
    // SESSION
    // =========================================================================

    /// Whether a session is currently live.
    #[must_use]
    pub fn authenticated(&self) -> bool {
        self.auth_rx.borrow().is_authenticated
    }

    /// The live session token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.auth_rx.borrow().token.clone()
    }

    #[must_use]
    pub fn auth_status(&self) -> Status {
        self.auth_rx.borrow().status
    }

    /// Message from the last failed login attempt, if any.
    #[must_use]
    pub fn auth_error(&self) -> Option<String> {
        self.auth_rx.borrow().error.clone()
    }

    /// Whole session snapshot.
    #[must_use]
    pub fn auth(&self) -> AuthState {
        self.auth_rx.borrow().clone()
    }

    // =========================================================================
    // PROFILE
    // =========================================================================

    /// The cached profile, if a fetch has succeeded this session.
    #[must_use]
    pub fn profile(&self) -> Option<UserProfile> {
        self.user_rx.borrow().profile.clone()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.user_rx.borrow().profile.as_ref().map(|p| p.id)
    }

    #[must_use]
    pub fn first_name(&self) -> Option<String> {
        self.user_rx.borrow().profile.as_ref().map(|p| p.first_name.clone())
    }

    #[must_use]
    pub fn last_name(&self) -> Option<String> {
        self.user_rx.borrow().profile.as_ref().map(|p| p.last_name.clone())
    }

    #[must_use]
    pub fn email(&self) -> Option<String> {
        self.user_rx.borrow().profile.as_ref().map(|p| p.email.clone())
    }

    #[must_use]
    pub fn user_status(&self) -> Status {
        self.user_rx.borrow().status
    }

    #[must_use]
    pub fn user_error(&self) -> Option<String> {
        self.user_rx.borrow().error.clone()
    }

    /// Whole profile snapshot.
    #[must_use]
    pub fn user(&self) -> UserState {
        self.user_rx.borrow().clone()
    }

    // =========================================================================
    // CHANGE NOTIFICATION
    // =========================================================================

    /// Wait until either container publishes a new snapshot.
    ///
    /// # Errors
    /// `Error::StoreClosed` when the store task is gone.
    pub async fn changed(&mut self) -> Result<(), Error> {
        tokio::select! {
            changed = self.auth_rx.changed() => changed.map_err(|_| Error::StoreClosed),
            changed = self.user_rx.changed() => changed.map_err(|_| Error::StoreClosed),
        }
    }
}
