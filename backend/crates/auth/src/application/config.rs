//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

/// Session tokens stay valid for 360 hours
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(360 * 3600);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 key for signing session tokens
    pub token_secret: Vec<u8>,
    /// Lifetime of an issued session token
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: vec![0u8; 32],
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config from a configured signing secret
    pub fn from_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random signing secret
    pub fn with_random_secret() -> Self {
        Self::from_secret(platform::crypto::random_bytes(32))
    }

    /// Create config for development
    ///
    /// Tokens do not survive a restart.
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Set the password pepper
    pub fn with_pepper(mut self, pepper: impl Into<Vec<u8>>) -> Self {
        self.password_pepper = Some(pepper.into());
        self
    }

    /// Get token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_360_hours() {
        assert_eq!(AuthConfig::default().token_ttl_secs(), 1_296_000);
    }

    #[test]
    fn test_random_secrets_differ() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_eq!(a.token_secret.len(), 32);
        assert_ne!(a.token_secret, b.token_secret);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = AuthConfig::from_secret(b"super-secret".to_vec()).with_pepper("pepper");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(!debug.contains("pepper\""));
        assert_eq!(config.pepper(), Some(&b"pepper"[..]));
    }
}
