//! Session error types.

use tessera_core::error::TesseraError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The presented credential must not be trusted: bad signature,
    /// malformed, missing claims, not bound to its session, or the
    /// session has ended.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// The token is well formed but names a session that no longer
    /// exists (or never did).
    #[error("unknown session: {0}")]
    SessionUnknown(String),

    /// The shared store rejected the write of a new session.
    #[error("session creation failed: {0}")]
    SessionCreationFailed(String),

    #[error("session store error: {0}")]
    Store(String),

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl SessionError {
    /// Whether the caller should answer as for a missing or bad
    /// credential. Everything else is a server-side failure.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            SessionError::InvalidToken(_) | SessionError::SessionUnknown(_)
        )
    }
}

impl From<TesseraError> for SessionError {
    fn from(err: TesseraError) -> Self {
        SessionError::Store(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_failures_are_unauthenticated() {
        assert!(SessionError::InvalidToken("forged".into()).is_unauthenticated());
        assert!(SessionError::SessionUnknown("abc".into()).is_unauthenticated());
    }

    #[test]
    fn server_failures_are_not_unauthenticated() {
        assert!(!SessionError::SessionCreationFailed("down".into()).is_unauthenticated());
        assert!(!SessionError::Store("down".into()).is_unauthenticated());
        assert!(!SessionError::Crypto("bad key".into()).is_unauthenticated());
    }

    #[test]
    fn store_errors_convert() {
        let err: SessionError = TesseraError::StoreUnavailable("refused".into()).into();
        assert!(matches!(err, SessionError::Store(msg) if msg.contains("refused")));
    }
}
