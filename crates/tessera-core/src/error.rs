//! Error types shared by every Tessera crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TesseraError {
    /// The shared store could not be reached (refused, dropped, timed out).
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for TesseraError {
    fn from(err: serde_json::Error) -> Self {
        TesseraError::Serialization(err.to_string())
    }
}

pub type TesseraResult<T> = Result<T, TesseraError>;
