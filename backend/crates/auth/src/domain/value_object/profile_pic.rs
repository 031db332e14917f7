//! Profile Picture Value Object
//!
//! Public URL of the user's current profile picture.

use kernel::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePicUrl(String);

impl ProfilePicUrl {
    pub fn new(url: impl Into<String>) -> Result<Self, ValidationError> {
        let url = url.into();
        validation::require("Profile picture", &url)?;
        validation::check_profile_pic(&url)?;
        Ok(Self(url))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
