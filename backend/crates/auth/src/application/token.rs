//! Session Token Issuer
//!
//! Tokens are `base64url(claims).base64url(HMAC-SHA256(claims))`. The claims
//! bind the user ID and an expiry; a random `jti` keeps two tokens issued in
//! the same second distinct.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use platform::crypto::{from_base64_url, random_bytes, to_base64_url};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::{session_token::SessionToken, user_id::UserId};
use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    iat: i64,
    exp: i64,
    jti: String,
}

/// Issues and verifies signed session tokens
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    secret: Vec<u8>,
    ttl_secs: i64,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.token_secret.clone(),
            ttl_secs: config.token_ttl_secs(),
        }
    }

    fn mac(&self) -> AuthResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret).map_err(|_| AuthError::TokenGeneration)
    }

    /// Issue a token for `user_id`, valid from now
    pub fn issue(&self, user_id: &UserId) -> AuthResult<SessionToken> {
        self.issue_at(user_id, Utc::now())
    }

    pub fn issue_at(&self, user_id: &UserId, now: DateTime<Utc>) -> AuthResult<SessionToken> {
        if user_id.is_nil() {
            return Err(AuthError::TokenGeneration);
        }

        let claims = Claims {
            sub: *user_id.as_uuid(),
            iat: now.timestamp(),
            exp: now.timestamp() + self.ttl_secs,
            jti: to_base64_url(&random_bytes(16)),
        };
        let payload = serde_json::to_vec(&claims).map_err(|_| AuthError::TokenGeneration)?;
        let payload = to_base64_url(&payload);

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        let signature = to_base64_url(&mac.finalize().into_bytes());

        Ok(SessionToken::new(format!("{}.{}", payload, signature)))
    }

    /// Check signature and expiry, returning the embedded user ID
    pub fn verify(&self, token: &str) -> AuthResult<UserId> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<UserId> {
        let (payload, signature) = token.split_once('.').ok_or(AuthError::Unauthenticated)?;
        let signature = from_base64_url(signature).map_err(|_| AuthError::Unauthenticated)?;

        let mut mac = self.mac().map_err(|_| AuthError::Unauthenticated)?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::Unauthenticated)?;

        let payload = from_base64_url(payload).map_err(|_| AuthError::Unauthenticated)?;
        let claims: Claims =
            serde_json::from_slice(&payload).map_err(|_| AuthError::Unauthenticated)?;

        if claims.exp <= now.timestamp() {
            return Err(AuthError::Unauthenticated);
        }

        Ok(UserId::from_uuid(claims.sub))
    }
}
