//! Session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::authorizations::Authorizations;
use super::user::User;

/// An authenticated session as seen by the host application.
///
/// Once returned from the session service the caller owns it outright;
/// changes made to it are not written back to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub user: User,
    pub authorizations: Authorizations,
    /// Client IP address at session creation.
    pub ip_address: String,
    /// Client hostname at session creation.
    pub remote_host: String,
    pub start_time: DateTime<Utc>,
    /// Set when the session has been terminated.
    pub end_time: Option<DateTime<Utc>>,
    /// Anti-replay value shared with the bearer token.
    pub nonce: String,
}

impl Session {
    /// A session is active until an end time is recorded.
    pub fn is_active(&self) -> bool {
        self.end_time.is_none()
    }
}
