//! Wire DTOs for the account API.
//!
//! DESIGN
//! ======
//! Success payloads arrive wrapped in a `body` envelope and use camelCase
//! member names; `Envelope<T>` peels the wrapper so call sites work with
//! the payload type directly. Failure payloads carry an optional top-level
//! `message`, which is the only field this client reads from them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Success wrapper: the API nests every payload under `body`.
///
/// Sibling fields (`status`, `message`) are ignored; the payload is the
/// contract.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub body: T,
}

/// Payload of a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionToken {
    /// Opaque session credential, later attached as a bearer token.
    pub token: String,
}

/// The account profile as the server reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Server-assigned account identifier.
    pub id: i64,
    /// Given name, editable through profile update.
    pub first_name: String,
    /// Family name, editable through profile update.
    pub last_name: String,
    /// Address the account was registered with.
    pub email: String,
}

/// Failure payload. The API usually reports `{ "message": … }`, but the
/// field is not guaranteed, so callers fall back to a fixed string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}
