//! Error Kind
//!
//! Coarse classification shared by every crate. Each kind is exactly one HTTP
//! status.

/// エラー種別
///
/// Upload rejections (unsupported type, wrong kind, oversize) are all
/// `BadRequest`; there is no 413 or 415 kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Malformed, missing or over-limit input
    BadRequest,
    /// Missing, invalid, expired or superseded bearer token
    Unauthorized,
    /// Account or sub-resource absent
    NotFound,
    /// Uniqueness violation
    Conflict,
    /// Any server-side fault, record store and file storage included
    InternalServerError,
}

impl ErrorKind {
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::InternalServerError => 500,
        }
    }

    /// Reason phrase, used as the problem `title`
    #[inline]
    pub const fn title(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::InternalServerError => "Internal Server Error",
        }
    }

    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Fixed detail that replaces the real message for 5xx kinds
    #[inline]
    pub const fn masked_detail(&self) -> Option<&'static str> {
        match self {
            ErrorKind::InternalServerError => Some("Internal server error"),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
