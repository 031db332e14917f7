//! Validation Rules
//!
//! The single home for input rules that both the persistence-facing entities
//! and the HTTP handlers enforce. Entities call these in their constructors and
//! mutators; handlers never re-implement them.

use thiserror::Error;

use crate::error::app_error::AppError;

/// Maximum number of words in a bio
pub const BIO_MAX_WORDS: usize = 500;

/// Maximum number of words in a video title
pub const TITLE_MAX_WORDS: usize = 30;

/// Maximum number of words in a video description
pub const DESCRIPTION_MAX_WORDS: usize = 120;

/// Maximum base64-decoded size of a stored profile picture reference (1 MiB)
pub const PROFILE_PIC_MAX_BYTES: usize = 1024 * 1024;

/// Required number of digits in a phone number
pub const PHONE_DIGITS: usize = 10;

/// A violated input rule, naming the offending field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must not exceed {max} words")]
    TooManyWords {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("Invalid {field} format")]
    InvalidFormat { field: &'static str },

    #[error("{field} size must be less than or equal to {max_bytes} bytes")]
    TooLarge {
        field: &'static str,
        max_bytes: usize,
    },
}

impl ValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooManyWords { field, .. }
            | ValidationError::InvalidFormat { field }
            | ValidationError::TooLarge { field, .. } => field,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::bad_request(err.to_string())
    }
}

/// Count whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Require a non-blank value and return it trimmed
pub fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(trimmed)
}

/// Require a non-blank value with at most `max` words
///
/// The boundary is inclusive: exactly `max` words passes.
pub fn require_words<'a>(
    field: &'static str,
    value: &'a str,
    max: usize,
) -> Result<&'a str, ValidationError> {
    let trimmed = require(field, value)?;
    let actual = word_count(trimmed);
    if actual > max {
        return Err(ValidationError::TooManyWords { field, max, actual });
    }
    Ok(value)
}

/// Match `^[^\s@]+@[^\s@]+\.[^\s@]+$`
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Some dot with at least one character on each side
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Exactly [`PHONE_DIGITS`] ASCII digits
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Decoded byte length of a value interpreted as base64
///
/// Counts every input byte as a base64 symbol and discounts up to two
/// trailing `=` padding characters.
pub fn base64_decoded_len(value: &str) -> usize {
    let bytes = value.as_bytes();
    let mut len = bytes.len();
    if len > 0 && bytes[len - 1] == b'=' {
        len -= 1;
        if len > 0 && bytes[len - 1] == b'=' {
            len -= 1;
        }
    }
    (len * 3) >> 2
}

/// Enforce the profile picture size ceiling on a stored reference
pub fn check_profile_pic(value: &str) -> Result<(), ValidationError> {
    if base64_decoded_len(value) > PROFILE_PIC_MAX_BYTES {
        return Err(ValidationError::TooLarge {
            field: "Profile picture",
            max_bytes: PROFILE_PIC_MAX_BYTES,
        });
    }
    Ok(())
}
