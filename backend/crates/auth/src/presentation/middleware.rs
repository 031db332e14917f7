//! Access Guard
//!
//! Middleware for requiring a live session on protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer;
use std::sync::Arc;

use crate::application::ResolveSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AccessGuardState<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<U>,
    pub config: Arc<AuthConfig>,
}

/// The identity resolved from the bearer credential
///
/// Inserted into request extensions for downstream handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub user: User,
}

/// Middleware that requires a valid bearer session
///
/// Credential failures are a uniform 401 and nothing downstream runs.
/// Store faults surface as 500.
pub async fn require_session<U>(
    State(state): State<AccessGuardState<U>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer(req.headers())?;

    let use_case = ResolveSessionUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case.execute(&token).await?;

    req.extensions_mut().insert(CurrentUser {
        user_id: user.user_id,
        user,
    });

    Ok(next.run(req).await)
}
