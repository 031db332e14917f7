//! Phone Value Object

use derive_more::Display;
use kernel::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};

/// Ten-digit phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub struct Phone(String);

impl Phone {
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into().trim().to_string();

        if phone.is_empty() {
            return Err(ValidationError::Required { field: "Phone" });
        }

        if !validation::is_valid_phone(&phone) {
            return Err(ValidationError::InvalidFormat {
                field: "phone number",
            });
        }

        Ok(Self(phone))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
