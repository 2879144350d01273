//! # teller
//!
//! Headless client for a demo bank's account API. Owns the session and
//! profile state machine behind a single store task, the HTTP data-access
//! calls that drive it, and the form validation rules both share.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server speaks JSON under `/api/v1/` and issues bearer tokens from
//! `user/login`. A [`TellerClient`] is the one handle applications hold:
//! it signs in and out, keeps the cached profile consistent with whichever
//! session is current, and optionally remembers tokens on disk between
//! runs. Reads go through [`state::reader::StateReader`], a watch handle
//! that observes every committed state change. The `teller` binary wraps
//! the same surface for the command line.

pub mod client;
pub mod config;
pub mod error;
pub mod net;
pub mod persist;
pub mod state;
pub mod util;

pub use client::TellerClient;
pub use config::Config;
pub use error::Error;
