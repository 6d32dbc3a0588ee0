//! Stored session record format.
//!
//! A [`SessionRecord`] is the only persisted representation of a
//! session: one flat JSON document per session, keyed by `session_id`
//! in the shared store. There is no index or secondary copy.
//!
//! Readers are lenient about records written by older deployments:
//! timestamps without an offset are taken as UTC, numeric user ids are
//! accepted, and records predating `authorizations`, `ip_address` or
//! `remote_host` fall back to empty values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TesseraResult;
use crate::models::authorizations::Authorizations;
use crate::models::session::Session;
use crate::models::user::User;

/// Wire form of a [`Session`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: String,
    pub nonce: String,
    #[serde(with = "timestamp")]
    pub start_time: DateTime<Utc>,
    /// Omitted entirely while the session is active.
    #[serde(
        default,
        with = "timestamp::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<DateTime<Utc>>,
    pub user: UserRecord,
    #[serde(default)]
    pub authorizations: Authorizations,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub remote_host: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: String,
    pub username: String,
    pub email: String,
}

impl SessionRecord {
    pub fn from_session(session: &Session) -> Self {
        Self {
            session_id: session.session_id.clone(),
            nonce: session.nonce.clone(),
            start_time: session.start_time,
            end_time: session.end_time,
            user: UserRecord {
                user_id: session.user.user_id.clone(),
                username: session.user.username.clone(),
                email: session.user.email.clone(),
            },
            authorizations: session.authorizations.clone(),
            ip_address: session.ip_address.clone(),
            remote_host: session.remote_host.clone(),
        }
    }

    pub fn into_session(self) -> Session {
        Session {
            session_id: self.session_id,
            user: User {
                user_id: self.user.user_id,
                username: self.user.username,
                email: self.user.email,
            },
            authorizations: self.authorizations,
            ip_address: self.ip_address,
            remote_host: self.remote_host,
            start_time: self.start_time,
            end_time: self.end_time,
            nonce: self.nonce,
        }
    }

    pub fn to_json(&self) -> TesseraResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a stored record. Anything that does not match the expected
    /// shape is a [`crate::TesseraError::Serialization`].
    pub fn from_json(raw: &str) -> TesseraResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// ISO-8601 timestamps. Written as RFC 3339 in UTC; read with or
/// without an offset.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }

    pub(super) fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
            return Ok(with_offset.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|e| format!("invalid timestamp {raw:?}: {e}"))
    }

    pub mod optional {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer, de};

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(t) => super::serialize(t, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| super::parse(&raw).map_err(de::Error::custom))
                .transpose()
        }
    }
}
