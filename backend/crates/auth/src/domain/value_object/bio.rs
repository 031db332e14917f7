//! Bio Value Object

use kernel::validation::{self, BIO_MAX_WORDS, ValidationError};
use serde::{Deserialize, Serialize};

/// Free-text biography, at most [`BIO_MAX_WORDS`] words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bio(String);

impl Bio {
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        validation::require_words("Bio", &text, BIO_MAX_WORDS)?;
        Ok(Self(text))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
