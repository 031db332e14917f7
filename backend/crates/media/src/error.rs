//! Media Error Types
//!
//! Media-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use auth::AuthError;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ValidationError;
use thiserror::Error;

/// Media-specific result type alias
pub type MediaResult<T> = Result<T, MediaError>;

/// Media-specific error variants
#[derive(Debug, Error)]
pub enum MediaError {
    /// Failure from the identity layer
    #[error(transparent)]
    Identity(#[from] AuthError),

    /// Declared type outside the allow-list
    #[error("Only JPEG, PNG, SVG images, and MP4 videos are allowed")]
    UnsupportedMediaType,

    /// Accepted type, wrong endpoint
    #[error("{0}")]
    WrongMediaKind(&'static str),

    /// File exceeds the per-file ceiling
    #[error("File too large")]
    PayloadTooLarge,

    /// Multipart body carried no file under the expected field
    #[error("{0}")]
    NoFile(&'static str),

    /// Malformed, missing or over-limit input
    #[error("{0}")]
    Validation(String),

    /// User or sub-resource absent
    #[error("{0}")]
    NotFound(&'static str),

    /// File could not be written or read
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Record store error
    #[error("Store error: {0}")]
    Store(AppError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MediaError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MediaError::Identity(err) => err.kind(),
            MediaError::UnsupportedMediaType
            | MediaError::WrongMediaKind(_)
            | MediaError::PayloadTooLarge
            | MediaError::NoFile(_)
            | MediaError::Validation(_) => ErrorKind::BadRequest,
            MediaError::NotFound(_) => ErrorKind::NotFound,
            MediaError::Store(err) => err.kind(),
            MediaError::Storage(_) | MediaError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures never expose their cause to the caller.
    pub fn to_app_error(&self) -> AppError {
        match self {
            MediaError::Identity(err) => err.to_app_error(),
            MediaError::Store(err) => err.public(),
            _ => AppError::new(self.kind(), self.to_string()).public(),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            MediaError::Identity(err) => err.log(),
            MediaError::Storage(e) => {
                tracing::error!(error = %e, "Media storage error");
            }
            MediaError::Store(err) => {
                tracing::error!(error = %err, "Media store error");
            }
            MediaError::Internal(msg) => {
                tracing::error!(message = %msg, "Media internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Media error");
            }
        }
    }
}

impl IntoResponse for MediaError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for MediaError {
    fn from(err: AppError) -> Self {
        MediaError::Store(err)
    }
}

impl From<sqlx::Error> for MediaError {
    fn from(err: sqlx::Error) -> Self {
        MediaError::Store(AppError::from(err))
    }
}

impl From<ValidationError> for MediaError {
    fn from(err: ValidationError) -> Self {
        MediaError::Validation(err.to_string())
    }
}

impl From<MultipartError> for MediaError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return MediaError::PayloadTooLarge;
        }
        MediaError::Validation(err.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_rejections_are_bad_request() {
        for err in [
            MediaError::UnsupportedMediaType,
            MediaError::WrongMediaKind("Only MP4 format is allowed"),
            MediaError::PayloadTooLarge,
            MediaError::NoFile("No image uploaded"),
            MediaError::Validation("Title is required".into()),
        ] {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_identity_errors_keep_status() {
        assert_eq!(
            MediaError::from(AuthError::Unauthenticated).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            MediaError::from(AuthError::UserNotFound).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_storage_fault_is_generic_500() {
        let err = MediaError::from(std::io::Error::other("disk full"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_app_error().message(), "Internal server error");
    }

    #[test]
    fn test_not_found_message() {
        let err = MediaError::NotFound("No bio found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_app_error().message(), "No bio found");
    }
}
