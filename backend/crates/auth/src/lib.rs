//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and the token issuer
//! - `infra/` - PostgreSQL and in-memory credential stores
//! - `presentation/` - HTTP handlers, DTOs, router, access guard
//!
//! ## Features
//! - Account creation with a password derived from identity fields and
//!   delivered by mail only
//! - Login by first name + password, issuing a signed bearer token
//! - Single active session per user: each login replaces the stored token
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Tokens are HMAC-SHA256 signed and expire after 360 hours
//! - A token resolves only while it equals the user's stored token

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{MemoryUserRepository, PgAuthRepository};
pub use presentation::router::{access_guard, auth_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::domain::repository::UserRepository;
    pub use crate::infra::postgres::PgAuthRepository as AuthStore;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
