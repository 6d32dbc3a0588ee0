//! Session service configuration.

use std::fmt;

/// Configuration for the session service.
///
/// Supplied by the host application at construction; nothing here is
/// read from process-wide state.
#[derive(Clone, Default)]
pub struct SessionConfig {
    /// Shared HMAC secret for signing and verifying bearer tokens.
    /// Every instance validating tokens must hold the same value.
    pub secret: String,
    /// Reject sessions older than this many seconds even if they were
    /// never terminated. `None` (the default) leaves lifetime bounded
    /// only by explicit termination.
    pub max_session_lifetime_secs: Option<u64>,
    /// Expiry handed to the store with each record write. `None` keeps
    /// records until they are deleted.
    pub record_ttl_secs: Option<u64>,
}

impl SessionConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("max_session_lifetime_secs", &self.max_session_lifetime_secs)
            .field("record_ttl_secs", &self.record_ttl_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_lifetime_limits() {
        let config = SessionConfig::new("foosecret");
        assert_eq!(config.secret, "foosecret");
        assert_eq!(config.max_session_lifetime_secs, None);
        assert_eq!(config.record_ttl_secs, None);
    }

    #[test]
    fn debug_hides_secret() {
        let rendered = format!("{:?}", SessionConfig::new("foosecret"));
        assert!(!rendered.contains("foosecret"));
    }
}
