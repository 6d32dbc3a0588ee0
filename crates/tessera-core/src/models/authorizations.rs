//! Authorization grants carried by a session.
//!
//! Tessera does not interpret these; they are stored with the session
//! and handed back verbatim on validation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorizations {
    /// Legacy numeric authorization level.
    #[serde(default)]
    pub classic: u32,
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub endorsements: Vec<String>,
}

impl Authorizations {
    pub fn new(classic: u32, scopes: Vec<String>, endorsements: Vec<String>) -> Self {
        Self {
            classic,
            scopes,
            endorsements,
        }
    }
}
