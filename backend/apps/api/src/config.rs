//! Process Configuration
//!
//! Everything the server needs from the environment, read once at startup.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use auth::AuthConfig;
use media::MediaConfig;
use platform::mail::MailCredentials;
use thiserror::Error;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MEDIA_ROOT: &str = "public";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

const REQUIRED_KEYS: [&str; 5] = [
    "DATABASE_URL",
    "SESSION_TOKEN_SECRET",
    "SMTP_MAIL",
    "SMTP_PASSWORD",
    "BASE_URL",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

pub struct AppConfig {
    pub database_url: String,
    pub session_token_secret: String,
    pub smtp: MailCredentials,
    /// Public base URL media links are built on
    pub base_url: String,
    pub port: u16,
    /// Directory holding the `image` and `video` buckets
    pub media_root: PathBuf,
    /// Log-only delivery when unset
    pub mail_relay_url: Option<String>,
    pub password_pepper: Option<String>,
    pub frontend_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup
    ///
    /// Blank values count as missing. Every missing required key is reported
    /// in a single error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(vec![key]));

        let port = match get("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            session_token_secret: required("SESSION_TOKEN_SECRET")?,
            smtp: MailCredentials {
                user: required("SMTP_MAIL")?,
                password: required("SMTP_PASSWORD")?,
            },
            base_url: required("BASE_URL")?.trim_end_matches('/').to_string(),
            port,
            media_root: get("MEDIA_ROOT")
                .unwrap_or_else(|| DEFAULT_MEDIA_ROOT.to_string())
                .into(),
            mail_relay_url: get("MAIL_RELAY_URL"),
            password_pepper: get("PASSWORD_PEPPER"),
            frontend_origins,
        })
    }

    pub fn auth_config(&self) -> AuthConfig {
        let config = AuthConfig::from_secret(self.session_token_secret.as_bytes().to_vec());
        match &self.password_pepper {
            Some(pepper) => config.with_pepper(pepper.as_bytes().to_vec()),
            None => config,
        }
    }

    pub fn media_config(&self) -> MediaConfig {
        MediaConfig::new(self.base_url.clone())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &"[REDACTED]")
            .field("session_token_secret", &"[REDACTED]")
            .field("smtp", &self.smtp)
            .field("base_url", &self.base_url)
            .field("port", &self.port)
            .field("media_root", &self.media_root)
            .field("mail_relay_url", &self.mail_relay_url)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .field("frontend_origins", &self.frontend_origins)
            .finish()
    }
}
