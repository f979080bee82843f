//! Session tokens: HS256-signed JWTs bound to a user id.
//!
//! Tokens are stateless. They are valid for a fixed 7-day window from issue and
//! cannot be revoked early. Verification failures are deliberately opaque:
//! callers only ever see [`InvalidToken`].

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shopshare_core::types::DbId;
use uuid::Uuid;

/// Lifetime of every session token.
pub const SESSION_TOKEN_LIFETIME_DAYS: i64 = 7;

/// JWT claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit.
    pub jti: String,
}

/// Configuration for token signing and verification.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var      | Required | Default |
    /// |--------------|----------|---------|
    /// | `JWT_SECRET` | **yes**  | --      |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");
        Self { secret }
    }
}

/// Any verification failure: bad signature, malformed payload, or expired.
#[derive(Debug, thiserror::Error)]
#[error("Invalid or expired token")]
pub struct InvalidToken;

/// Issue a session token for `user_id`, valid for [`SESSION_TOKEN_LIFETIME_DAYS`].
pub fn issue(user_id: DbId, config: &JwtConfig) -> Result<String, jsonwebtoken::errors::Error> {
    issue_at(user_id, Utc::now(), config)
}

/// Issue a token as if the current time were `now`.
pub fn issue_at(
    user_id: DbId,
    now: DateTime<Utc>,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id,
        iat: now.timestamp(),
        exp: (now + Duration::days(SESSION_TOKEN_LIFETIME_DAYS)).timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify a token and return the user id it was issued for.
pub fn verify(token: &str, config: &JwtConfig) -> Result<DbId, InvalidToken> {
    let mut validation = Validation::default(); // HS256, validates exp
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!(error = %e, "Session token rejected");
        InvalidToken
    })?;
    Ok(data.claims.sub)
}
