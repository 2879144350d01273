//! Client-side state containers and the store that owns them.
//!
//! DESIGN
//! ======
//! `auth` and `user` are value types with pure transitions; `store` is the
//! single-writer task that applies commands and runs their storage effects;
//! `reader` is the read-only view handed to presentation code.

pub mod auth;
pub mod reader;
pub mod store;
pub mod user;
