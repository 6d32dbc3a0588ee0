//! Bearer token validation pipeline.
//!
//! Steps run in a fixed order and the first failure decides the error:
//! verify → fetch → parse → bind → expire.

use chrono::{DateTime, Utc};
use tessera_core::models::session::Session;
use tessera_core::record::SessionRecord;
use tessera_core::store::KeyValueStore;
use tracing::{debug, warn};

use crate::error::SessionError;
use crate::service::SessionStore;
use crate::token::{self, SessionClaims};

impl<S: KeyValueStore> SessionStore<S> {
    /// Validate a bearer token and reconstruct the session it names.
    ///
    /// Costs one store round trip; nothing is cached between calls.
    pub async fn load(&self, token: &str) -> Result<Session, SessionError> {
        // 1. Signature and structure.
        let claims = token::verify_token(token, &self.config.secret).inspect_err(|e| {
            debug!(error = %e, "Rejected bearer token");
        })?;

        // 2–3. Record lookup and parse.
        let record = self.fetch_record(&claims.session_id).await?;

        // 4. Token must belong to this record.
        check_binding(&claims, &record)?;

        // 5. Session must still be live.
        check_expiry(&record, self.config.max_session_lifetime_secs, Utc::now())?;

        Ok(record.into_session())
    }

    /// Read and parse the record for `session_id`.
    ///
    /// An absent or blank value is [`SessionError::SessionUnknown`]; a
    /// value that does not parse is treated as corruption and reported
    /// as [`SessionError::InvalidToken`].
    pub(crate) async fn fetch_record(&self, session_id: &str) -> Result<SessionRecord, SessionError> {
        let raw = match self.store.get(session_id).await? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                debug!(session_id, "No record for session");
                return Err(SessionError::SessionUnknown(session_id.to_string()));
            }
        };

        SessionRecord::from_json(&raw).map_err(|e| {
            warn!(session_id, error = %e, "Stored session record is corrupt");
            SessionError::InvalidToken(format!("corrupt session record: {e}"))
        })
    }
}

fn check_binding(claims: &SessionClaims, record: &SessionRecord) -> Result<(), SessionError> {
    if claims.nonce != record.nonce {
        warn!(
            session_id = %record.session_id,
            "Token nonce does not match session record"
        );
        return Err(SessionError::InvalidToken(
            "token nonce does not match session".into(),
        ));
    }

    if claims.user_id.as_deref() != Some(record.user.user_id.as_str()) {
        warn!(
            session_id = %record.session_id,
            token_user_id = claims.user_id.as_deref().unwrap_or("<none>"),
            record_user_id = %record.user.user_id,
            "Token user does not match session record"
        );
        return Err(SessionError::InvalidToken(
            "token user does not match session".into(),
        ));
    }

    Ok(())
}

fn check_expiry(
    record: &SessionRecord,
    max_lifetime_secs: Option<u64>,
    now: DateTime<Utc>,
) -> Result<(), SessionError> {
    if let Some(end_time) = record.end_time {
        debug!(session_id = %record.session_id, %end_time, "Session has ended");
        return Err(SessionError::InvalidToken(format!(
            "session ended at {end_time}"
        )));
    }

    if let Some(max_secs) = max_lifetime_secs {
        let age_ms = (now - record.start_time).num_milliseconds();
        let max_ms = i64::try_from(max_secs.saturating_mul(1000)).unwrap_or(i64::MAX);
        if age_ms > max_ms {
            debug!(session_id = %record.session_id, age_ms, "Session exceeded maximum lifetime");
            return Err(SessionError::InvalidToken(
                "session exceeded maximum lifetime".into(),
            ));
        }
    }

    Ok(())
}
