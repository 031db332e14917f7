//! Application Configuration
//!
//! Configuration for the Media application layer.

/// Per-file upload ceiling (6 MiB)
pub const MAX_FILE_BYTES: usize = 6 * 1024 * 1024;

/// Allowance for the non-file parts of a multipart body
pub const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Media application configuration
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Public base URL media links are built on
    pub base_url: String,
    /// Per-file upload ceiling in bytes
    pub max_file_bytes: usize,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            max_file_bytes: MAX_FILE_BYTES,
        }
    }
}

impl MediaConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Create config for development (localhost links)
    pub fn development() -> Self {
        Self::default()
    }

    /// Request body limit for upload routes
    pub fn body_limit(&self) -> usize {
        self.max_file_bytes + FORM_OVERHEAD_BYTES
    }
}
