//! Session service — creation, termination and deletion of sessions in
//! the shared store.

use chrono::Utc;
use tessera_core::models::{authorizations::Authorizations, session::Session, user::User};
use tessera_core::record::SessionRecord;
use tessera_core::store::KeyValueStore;
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::token;

/// Input for the session creation flow.
#[derive(Debug)]
pub struct CreateSessionInput {
    pub user: User,
    pub authorizations: Authorizations,
    pub ip_address: String,
    pub remote_host: String,
}

/// Successful session creation result.
#[derive(Debug)]
pub struct CreatedSession {
    pub session: Session,
    /// Signed bearer token to hand to the client.
    pub token: String,
}

/// Session service.
///
/// Generic over the shared store so that the session layer has no
/// dependency on a particular backend. Holds no per-session state: every
/// call is answered from the store.
pub struct SessionStore<S: KeyValueStore> {
    pub(crate) store: S,
    pub(crate) config: SessionConfig,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S, config: SessionConfig) -> Self {
        Self { store, config }
    }

    /// Start a new session for an authenticated user and issue its
    /// bearer token.
    ///
    /// Exactly one store write happens. If it fails the caller gets
    /// [`SessionError::SessionCreationFailed`] and no token.
    pub async fn create(&self, input: CreateSessionInput) -> Result<CreatedSession, SessionError> {
        // 1. Fresh identifiers.
        let session = Session {
            session_id: token::generate_session_id(),
            user: input.user,
            authorizations: input.authorizations,
            ip_address: input.ip_address,
            remote_host: input.remote_host,
            start_time: Utc::now(),
            end_time: None,
            nonce: token::generate_nonce(),
        };

        // 2. Sign before writing, so the write is the last step that can fail.
        let token = token::issue_token(
            &session.user.user_id,
            &session.session_id,
            &session.nonce,
            &self.config.secret,
        )?;

        // 3. Persist.
        let record = SessionRecord::from_session(&session)
            .to_json()
            .map_err(|e| SessionError::SessionCreationFailed(e.to_string()))?;

        if let Err(e) = self
            .store
            .set(&session.session_id, record, self.config.record_ttl_secs)
            .await
        {
            warn!(
                session_id = %session.session_id,
                user_id = %session.user.user_id,
                error = %e,
                "Failed to persist new session"
            );
            return Err(SessionError::SessionCreationFailed(e.to_string()));
        }

        info!(
            session_id = %session.session_id,
            user_id = %session.user.user_id,
            ip_address = %session.ip_address,
            "Session created"
        );

        Ok(CreatedSession { session, token })
    }

    /// Remove a session record. Deleting a session that does not exist
    /// is not an error.
    pub async fn delete(&self, session_id: &str) -> Result<(), SessionError> {
        self.store.delete(session_id).await?;
        debug!(session_id, "Session deleted");
        Ok(())
    }

    /// End a session by stamping its end time. Tokens for it are
    /// rejected from then on; the record stays until deleted or expired
    /// by the store, and its store expiry is left as it was.
    ///
    /// The write only lands if the record still exists, so a concurrent
    /// `delete` is never undone: that race reports
    /// [`SessionError::SessionUnknown`]. Terminating an already ended
    /// session keeps the original end time.
    pub async fn terminate(&self, session_id: &str) -> Result<(), SessionError> {
        let mut record = self.fetch_record(session_id).await?;
        if record.end_time.is_some() {
            debug!(session_id, "Session already ended");
            return Ok(());
        }

        record.end_time = Some(Utc::now());
        let raw = record.to_json()?;
        if !self.store.replace(session_id, raw).await? {
            debug!(session_id, "Session removed before it could be terminated");
            return Err(SessionError::SessionUnknown(session_id.to_string()));
        }

        info!(session_id, user_id = %record.user.user_id, "Session terminated");
        Ok(())
    }

    /// Log out the holder of `token`: validate it, then terminate the
    /// session it names.
    pub async fn invalidate(&self, token: &str) -> Result<(), SessionError> {
        let session = self.load(token).await?;
        self.terminate(&session.session_id).await
    }
}
