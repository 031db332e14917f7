//! Auth Router

use axum::{Router, routing::post};
use platform::mail::Mailer;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::AccessGuardState;

/// Create the Auth router for any repository and mailer
///
/// Serves `/createAccount` and `/login`; both are unauthenticated.
pub fn auth_router<U, M>(repo: Arc<U>, mailer: Arc<M>, config: Arc<AuthConfig>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Sync + 'static,
{
    let state = AuthAppState {
        repo,
        mailer,
        config,
    };

    Router::new()
        .route("/createAccount", post(handlers::create_account::<U, M>))
        .route("/login", post(handlers::login::<U, M>))
        .with_state(state)
}

/// State for guarding other routers with `require_session`
pub fn access_guard<U>(repo: Arc<U>, config: Arc<AuthConfig>) -> AccessGuardState<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    AccessGuardState { repo, config }
}
