//! Store-specific error types and conversions.

use tessera_core::error::TesseraError;

/// Store-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Invalid store configuration: {0}")]
    Config(String),
}

impl StoreError {
    /// True when the failure is about reaching the store at all rather
    /// than about the command that was sent.
    pub fn is_unavailable(&self) -> bool {
        match self {
            StoreError::Redis(e) => {
                e.is_io_error()
                    || e.is_connection_refusal()
                    || e.is_connection_dropped()
                    || e.is_timeout()
            }
            StoreError::Config(_) => false,
        }
    }
}

impl From<StoreError> for TesseraError {
    fn from(err: StoreError) -> Self {
        if err.is_unavailable() {
            TesseraError::StoreUnavailable(err.to_string())
        } else {
            TesseraError::Store(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn refused_connection_is_unavailable() {
        let io_err = io::Error::new(io::ErrorKind::ConnectionRefused, "refused");
        let err = StoreError::from(redis::RedisError::from(io_err));

        assert!(err.is_unavailable());
        assert!(matches!(
            TesseraError::from(err),
            TesseraError::StoreUnavailable(_)
        ));
    }

    #[test]
    fn command_failure_is_a_store_error() {
        let err = StoreError::from(redis::RedisError::from((
            redis::ErrorKind::TypeError,
            "bad type",
        )));

        assert!(!err.is_unavailable());
        assert!(matches!(TesseraError::from(err), TesseraError::Store(_)));
    }

    #[test]
    fn bad_config_is_a_store_error() {
        let err = StoreError::Config("port out of range".into());

        assert!(!err.is_unavailable());
        assert!(matches!(TesseraError::from(err), TesseraError::Store(_)));
    }
}
