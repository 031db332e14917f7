//! Bearer Credential Extraction
//!
//! Reads `Authorization: Bearer <token>` from request headers.

use axum::http::{HeaderMap, header};

/// Why a bearer credential could not be read
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    #[error("Authorization header missing")]
    Missing,

    #[error("Authorization header malformed")]
    Malformed,
}

/// Extract the bearer token from headers
///
/// The scheme is matched case-insensitively; the token must be non-empty
/// and contain no whitespace.
pub fn extract_bearer(headers: &HeaderMap) -> Result<String, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?;

    let (scheme, token) = value.trim().split_once(' ').ok_or(BearerError::Malformed)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerError::Malformed);
    }

    let token = token.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(BearerError::Malformed);
    }

    Ok(token.to_string())
}
