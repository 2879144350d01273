//! Networking layer for the account API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the request plumbing shared by every operation, `auth` and
//! `user` implement the data-access operations on the client context, and
//! `types` defines the wire schema.

pub mod api;
pub mod auth;
pub mod types;
pub mod user;
