//! Crate-wide error type for validation, transport, and API rejections.
//!
//! DESIGN
//! ======
//! `Display` always yields the text a caller can surface directly to the
//! user: validation messages are the fixed form-field strings, rejections
//! carry the server's own message (or the per-operation fallback), and
//! transport failures carry the fallback with the underlying `reqwest`
//! error preserved as `source` for logs.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A form field failed local validation. The message is the fixed
    /// per-field string shown next to the input.
    #[error("{0}")]
    Validation(&'static str),

    /// The API answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response (connection refused, DNS,
    /// timeout) or the success body did not decode.
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// The shared HTTP client could not be constructed.
    #[error("http client initialization failed: {0}")]
    Init(#[from] reqwest::Error),

    /// The state task has shut down, so a dispatch could not be
    /// acknowledged. Indicates a dropped `Store` handle, not a user error.
    #[error("session store is no longer running")]
    StoreClosed,
}

impl Error {
    /// HTTP status for API rejections, `None` for every other variant.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
