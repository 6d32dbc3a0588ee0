//! Tessera Auth — session creation, bearer token issuance, and the
//! token validation pipeline.

pub mod config;
pub mod error;
pub mod service;
pub mod token;
mod validation;

pub use config::SessionConfig;
pub use error::SessionError;
pub use service::{CreateSessionInput, CreatedSession, SessionStore};
pub use token::SessionClaims;
