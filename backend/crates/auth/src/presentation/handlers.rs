//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use platform::mail::Mailer;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{CreateAccountInput, CreateAccountUseCase, LoginInput, LoginUseCase};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    CreateAccountRequest, LoginRequest, LoginResponse, MessageResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<U, M>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Sync + 'static,
{
    pub repo: Arc<U>,
    pub mailer: Arc<M>,
    pub config: Arc<AuthConfig>,
}

/// Map a JSON body rejection to a 400
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> AuthResult<T> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AuthError::Validation(rejection.body_text()))
}

// ============================================================================
// Create Account
// ============================================================================

/// POST /api/createAccount
pub async fn create_account<U, M>(
    State(state): State<AuthAppState<U, M>>,
    body: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<MessageResponse>)>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Sync + 'static,
{
    let req = json_body(body)?;

    let use_case = CreateAccountUseCase::new(
        state.repo.clone(),
        state.mailer.clone(),
        state.config.clone(),
    );

    use_case
        .execute(CreateAccountInput {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully!".to_string(),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<U, M>(
    State(state): State<AuthAppState<U, M>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<LoginResponse>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Sync + 'static,
{
    let req = json_body(body)?;

    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            first_name: req.first_name,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token: output.token.as_str().to_string(),
    }))
}
