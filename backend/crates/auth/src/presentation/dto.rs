//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Create Account
// ============================================================================

/// Create account request
///
/// Absent fields deserialize as empty and are rejected by the use case.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateAccountRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Body carrying only a confirmation message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub first_name: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("first_name", &self.first_name)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Login response
#[derive(Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}
