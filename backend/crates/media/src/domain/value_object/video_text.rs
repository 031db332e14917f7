//! Video title and description

use kernel::validation::{self, DESCRIPTION_MAX_WORDS, TITLE_MAX_WORDS, ValidationError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title(String);

impl Title {
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        validation::require_words("Title", &text, TITLE_MAX_WORDS)?;
        Ok(Self(text))
    }

    pub fn from_db(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description(String);

impl Description {
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        validation::require_words("Description", &text, DESCRIPTION_MAX_WORDS)?;
        Ok(Self(text))
    }

    pub fn from_db(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["w"; n].join(" ")
    }

    #[test]
    fn test_title_limit() {
        assert!(Title::new(words(30)).is_ok());
        let err = Title::new(words(31)).unwrap_err();
        assert_eq!(err.to_string(), "Title must not exceed 30 words");
    }

    #[test]
    fn test_description_limit() {
        assert!(Description::new(words(120)).is_ok());
        let err = Description::new(words(121)).unwrap_err();
        assert_eq!(err.field(), "Description");
    }

    #[test]
    fn test_required() {
        assert!(Title::new("").is_err());
        assert!(Description::new("   ").is_err());
    }
}
