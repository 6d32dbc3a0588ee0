//! Tessera Core — session domain models, the stored record format, and
//! the contract every shared store backend implements.

pub mod error;
pub mod models;
pub mod record;
pub mod store;

pub use error::{TesseraError, TesseraResult};
pub use models::{authorizations::Authorizations, session::Session, user::User};
pub use record::SessionRecord;
pub use store::KeyValueStore;
