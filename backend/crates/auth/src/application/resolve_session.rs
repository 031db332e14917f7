//! Resolve Session Use Case
//!
//! Maps a presented bearer token to the user whose current session it is.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenIssuer;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Resolve session use case
pub struct ResolveSessionUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    issuer: TokenIssuer,
}

impl<U> ResolveSessionUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            issuer: TokenIssuer::new(&config),
        }
    }

    /// Resolve `token` to its user
    ///
    /// A token that verifies but is no longer the user's stored token
    /// (superseded by a later login) is rejected.
    pub async fn execute(&self, token: &str) -> AuthResult<User> {
        let user_id = self.issuer.verify(token)?;

        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::Unauthenticated)?;

        if !user.holds_session(token) {
            return Err(AuthError::Unauthenticated);
        }

        Ok(user)
    }
}
