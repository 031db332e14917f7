//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ValidationError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed, missing or over-limit input
    #[error("{0}")]
    Validation(String),

    /// Identity fields too short to derive a password from
    #[error("{0}")]
    InvalidInput(String),

    /// Email or phone already registered
    #[error("User with this email or phone already exists")]
    AccountExists,

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Invalid credentials (wrong password)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bearer credential missing, malformed, expired or superseded
    #[error("Authentication failed")]
    Unauthenticated,

    /// Token could not be issued
    #[error("Error generating token")]
    TokenGeneration,

    /// Record store error
    #[error("Store error: {0}")]
    Store(AppError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) | AuthError::InvalidInput(_) => ErrorKind::BadRequest,
            AuthError::AccountExists => ErrorKind::Conflict,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::InvalidCredentials | AuthError::Unauthenticated => ErrorKind::Unauthorized,
            AuthError::Store(err) => err.kind(),
            AuthError::TokenGeneration | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures never expose their cause to the caller.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Store(err) => err.public(),
            _ => AppError::new(self.kind(), self.to_string()).public(),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Store(err) => {
                tracing::error!(error = %err, "Auth store error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::TokenGeneration => {
                tracing::error!("Session token could not be issued");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Unauthenticated => {
                tracing::warn!("Rejected bearer credential");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Store(err)
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        let err = AppError::from(err);
        if err.kind() == ErrorKind::Conflict {
            return AuthError::AccountExists;
        }
        AuthError::Store(err)
    }
}

impl From<ValidationError> for AuthError {
    fn from(err: ValidationError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<platform::bearer::BearerError> for AuthError {
    fn from(_: platform::bearer::BearerError) -> Self {
        AuthError::Unauthenticated
    }
}
