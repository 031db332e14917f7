//! Person Name Value Object
//!
//! First and last names as entered at registration, whitespace-trimmed.
//! First names double as the login key.

use derive_more::Display;
use kernel::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(field: &'static str, name: &str) -> Result<Self, ValidationError> {
        validation::require(field, name).map(|trimmed| Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in Unicode code points
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_trimmed() {
        let name = PersonName::new("First name", "  Ada ").unwrap();
        assert_eq!(name.as_str(), "Ada");
        assert_eq!(name.char_len(), 3);
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(
            PersonName::new("First name", "   "),
            Err(ValidationError::Required {
                field: "First name"
            })
        );
    }
}
