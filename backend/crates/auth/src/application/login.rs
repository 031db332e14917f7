//! Login Use Case
//!
//! Verifies the password of the account keyed by first name and issues a
//! session token that replaces any earlier one.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenIssuer;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{session_token::SessionToken, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub first_name: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub token: SessionToken,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    issuer: TokenIssuer,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            issuer: TokenIssuer::new(&config),
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        if input.first_name.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation(
                "First name and password are required".to_string(),
            ));
        }

        let user = self
            .user_repo
            .find_by_first_name(input.first_name.trim())
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let password = RawPassword::new(input.password)?;
        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issuer.issue(&user.user_id)?;
        self.user_repo
            .update_session_token(&user.user_id, &token)
            .await?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput { token })
    }
}
