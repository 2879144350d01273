//! Cached account profile and its pure transitions.
//!
//! DESIGN
//! ======
//! The four profile fields travel together: they are either all present
//! (one `UserProfile`) or all absent, which rules out half-populated
//! profiles by construction. `status` and `error` describe the last
//! profile request and are untouched by profile writes.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::Serialize;

use crate::net::types::UserProfile;
use crate::state::auth::Status;

/// The profile cache for the signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserState {
    /// Cached profile, absent until a fetch succeeds.
    #[serde(flatten)]
    pub profile: Option<UserProfile>,
    pub status: Status,
    pub error: Option<String>,
}

impl UserState {
    /// Empty cache: no profile, idle, no error.
    #[must_use]
    pub fn new() -> Self {
        Self { profile: None, status: Status::Idle, error: None }
    }

    /// Replace the cached profile wholesale. Request markers are untouched.
    #[must_use]
    pub fn with_profile(&self, profile: UserProfile) -> Self {
        Self { profile: Some(profile), status: self.status, error: self.error.clone() }
    }
}

impl Default for UserState {
    fn default() -> Self {
        Self::new()
    }
}
