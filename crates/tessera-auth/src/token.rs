//! Bearer token issuance/verification and session identifier
//! generation.
//!
//! Tokens are HS256 JWTs carrying exactly three claims. They have no
//! `exp`: how long a token is good for is decided by the stored
//! session record, so sessions can be ended server-side regardless of
//! what a client still holds.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SessionError;

/// Claims embedded in every bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Bound user. Optional at decode time; a token without it can
    /// never pass the binding check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub session_id: String,
    pub nonce: String,
}

/// Issue a signed HS256 bearer token for a session.
pub fn issue_token(
    user_id: &str,
    session_id: &str,
    nonce: &str,
    secret: &str,
) -> Result<String, SessionError> {
    let claims = SessionClaims {
        user_id: Some(user_id.to_string()),
        session_id: session_id.to_string(),
        nonce: nonce.to_string(),
    };

    let key = EncodingKey::from_secret(signing_secret(secret)?);
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key)
        .map_err(|e| SessionError::Crypto(format!("JWT encode: {e}")))
}

/// Verify a bearer token's signature and decode its claims.
///
/// Anything that is not an HS256 JWT signed with `secret` and carrying
/// both `session_id` and `nonce` is [`SessionError::InvalidToken`].
/// An empty `secret` is [`SessionError::Crypto`].
pub fn verify_token(token: &str, secret: &str) -> Result<SessionClaims, SessionError> {
    let key = DecodingKey::from_secret(signing_secret(secret)?);

    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;

    jsonwebtoken::decode::<SessionClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| SessionError::InvalidToken(e.to_string()))
}

/// HMAC keys must be non-empty.
fn signing_secret(secret: &str) -> Result<&[u8], SessionError> {
    if secret.is_empty() {
        return Err(SessionError::Crypto("signing secret is empty".into()));
    }
    Ok(secret.as_bytes())
}

/// Generate a new session identifier (random UUID v4, 32 hex chars).
pub fn generate_session_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Generate a cryptographically random nonce
/// (32 bytes → base64url-encoded, no padding).
pub fn generate_nonce() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rand::Rng::random(&mut rng);
    URL_SAFE_NO_PAD.encode(bytes)
}
