//! Media URL Value Object

use derive_more::Display;
use serde::Serialize;

use crate::domain::value_object::{media_type::Bucket, stored_name::StoredName};

/// Public URL of a stored file: `<base>/<bucket>/<stored name>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display)]
pub struct MediaUrl(String);

impl MediaUrl {
    pub fn build(base_url: &str, bucket: Bucket, name: &StoredName) -> Self {
        let path = format!("{}/{}", bucket.as_str(), name.as_str()).replace('\\', "/");
        Self(format!("{}/{}", base_url.trim_end_matches('/'), path))
    }

    /// Create from database value
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
