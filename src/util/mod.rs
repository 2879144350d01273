//! Utility helpers shared across the client surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `validate` holds the form-field rules callers run before any network
//! call, keeping input policy out of the data-access layer.

pub mod validate;
