//! Domain models for Tessera.
//!
//! These are the in-memory entities handed to and returned from the
//! session service. Their persisted form lives in [`crate::record`].

pub mod authorizations;
pub mod session;
pub mod user;
