//! Application Layer
//!
//! Use cases and application services.

pub mod account_mail;
pub mod config;
pub mod create_account;
pub mod login;
pub mod resolve_session;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use create_account::{CreateAccountInput, CreateAccountOutput, CreateAccountUseCase};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use resolve_session::ResolveSessionUseCase;
pub use token::TokenIssuer;
