//! Cross-layer tests for the auth crate

#[cfg(test)]
mod support {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use platform::mail::{MailError, Mailer, OutgoingMail};

    /// Mailer that keeps every message it is handed
    #[derive(Clone, Default)]
    pub struct RecordingMailer {
        pub sent: Arc<Mutex<Vec<OutgoingMail>>>,
    }

    impl Mailer for RecordingMailer {
        async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(mail);
            Ok(())
        }
    }

    impl RecordingMailer {
        /// Wait for the fire-and-forget delivery to land
        pub async fn wait_for(&self, count: usize) -> Vec<OutgoingMail> {
            for _ in 0..100 {
                {
                    let sent = self.sent.lock().unwrap();
                    if sent.len() >= count {
                        return sent.clone();
                    }
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
            panic!("expected {count} mail(s)");
        }
    }

    /// Mailer whose relay always refuses
    #[derive(Clone, Default)]
    pub struct RefusingMailer;

    impl Mailer for RefusingMailer {
        async fn send(&self, _mail: OutgoingMail) -> Result<(), MailError> {
            Err(MailError::Rejected(550))
        }
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use super::support::{RecordingMailer, RefusingMailer};
    use crate::application::*;
    use crate::domain::repository::UserRepository;
    use crate::error::AuthError;
    use crate::infra::MemoryUserRepository;

    fn ada() -> CreateAccountInput {
        CreateAccountInput {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            phone: "5551234567".to_string(),
        }
    }

    fn config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig::from_secret(b"test-secret".to_vec()))
    }

    async fn login(repo: &Arc<MemoryUserRepository>, password: &str) -> Result<LoginOutput, AuthError> {
        LoginUseCase::new(repo.clone(), config())
            .execute(LoginInput {
                first_name: "Ada".to_string(),
                password: password.to_string(),
            })
            .await
    }

    #[tokio::test]
    async fn test_create_account_mails_derived_password() {
        let repo = Arc::new(MemoryUserRepository::new());
        let mailer = Arc::new(RecordingMailer::default());
        let use_case = CreateAccountUseCase::new(repo.clone(), mailer.clone(), config());

        let output = use_case.execute(ada()).await.unwrap();
        assert_eq!(output.user.email.as_str(), "ada@x.com");
        assert!(output.user.session_token.is_empty());

        let sent = mailer.wait_for(1).await;
        assert_eq!(sent[0].to, "ada@x.com");
        assert_eq!(sent[0].subject, "Account Created");
        assert!(sent[0].html.contains("Adce4567"));

        let stored = repo.find_by_id(&output.user.user_id).await.unwrap().unwrap();
        assert_ne!(stored.password_hash.as_phc_string(), "Adce4567");
    }

    #[tokio::test]
    async fn test_create_account_conflicts() {
        let repo = Arc::new(MemoryUserRepository::new());
        let mailer = Arc::new(RecordingMailer::default());
        let use_case = CreateAccountUseCase::new(repo.clone(), mailer, config());
        use_case.execute(ada()).await.unwrap();

        let mut same_email = ada();
        same_email.phone = "5550000000".to_string();
        same_email.email = "  ADA@x.com ".to_string();
        assert!(matches!(
            use_case.execute(same_email).await,
            Err(AuthError::AccountExists)
        ));

        let mut same_phone = ada();
        same_phone.email = "other@x.com".to_string();
        assert!(matches!(
            use_case.execute(same_phone).await,
            Err(AuthError::AccountExists)
        ));
    }

    #[tokio::test]
    async fn test_create_account_validation() {
        let repo = Arc::new(MemoryUserRepository::new());
        let use_case =
            CreateAccountUseCase::new(repo, Arc::new(RecordingMailer::default()), config());

        let mut missing = ada();
        missing.last_name = String::new();
        let err = use_case.execute(missing).await.unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");

        let mut bad_email = ada();
        bad_email.email = "ada@x".to_string();
        assert!(matches!(
            use_case.execute(bad_email).await,
            Err(AuthError::Validation(_))
        ));

        let mut bad_phone = ada();
        bad_phone.phone = "555123".to_string();
        assert!(matches!(
            use_case.execute(bad_phone).await,
            Err(AuthError::Validation(_))
        ));

        let mut short_name = ada();
        short_name.first_name = "A".to_string();
        assert!(matches!(
            use_case.execute(short_name).await,
            Err(AuthError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_mail_failure_does_not_fail_creation() {
        let repo = Arc::new(MemoryUserRepository::new());
        let use_case = CreateAccountUseCase::new(repo, Arc::new(RefusingMailer), config());
        assert!(use_case.execute(ada()).await.is_ok());
    }

    #[tokio::test]
    async fn test_login_outcomes() {
        let repo = Arc::new(MemoryUserRepository::new());
        CreateAccountUseCase::new(repo.clone(), Arc::new(RecordingMailer::default()), config())
            .execute(ada())
            .await
            .unwrap();

        assert!(login(&repo, "Adce4567").await.is_ok());
        assert!(matches!(
            login(&repo, "Adce4568").await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            login(&repo, "").await,
            Err(AuthError::Validation(_))
        ));

        let unknown = LoginUseCase::new(repo.clone(), config())
            .execute(LoginInput {
                first_name: "Grace".to_string(),
                password: "Adce4567".to_string(),
            })
            .await;
        assert!(matches!(unknown, Err(AuthError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_second_login_supersedes_first() {
        let repo = Arc::new(MemoryUserRepository::new());
        CreateAccountUseCase::new(repo.clone(), Arc::new(RecordingMailer::default()), config())
            .execute(ada())
            .await
            .unwrap();

        let first = login(&repo, "Adce4567").await.unwrap().token;
        let second = login(&repo, "Adce4567").await.unwrap().token;
        assert_ne!(first, second);

        let resolve = ResolveSessionUseCase::new(repo.clone(), config());
        assert!(matches!(
            resolve.execute(first.as_str()).await,
            Err(AuthError::Unauthenticated)
        ));
        let user = resolve.execute(second.as_str()).await.unwrap();
        assert_eq!(user.first_name.as_str(), "Ada");
    }

    #[tokio::test]
    async fn test_valid_token_for_unknown_user_rejected() {
        let repo = Arc::new(MemoryUserRepository::new());
        let token = TokenIssuer::new(&config())
            .issue(&crate::domain::value_object::user_id::UserId::new())
            .unwrap();

        let resolve = ResolveSessionUseCase::new(repo, config());
        assert!(matches!(
            resolve.execute(token.as_str()).await,
            Err(AuthError::Unauthenticated)
        ));
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use axum::{Extension, Json};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::support::RecordingMailer;
    use crate::application::AuthConfig;
    use crate::infra::MemoryUserRepository;
    use crate::presentation::{CurrentUser, access_guard, auth_router, require_session};

    fn app() -> Router {
        let repo = Arc::new(MemoryUserRepository::new());
        let config = Arc::new(AuthConfig::from_secret(b"test-secret".to_vec()));
        let guard = access_guard(repo.clone(), config.clone());

        let protected = Router::new()
            .route(
                "/me",
                get(|Extension(current): Extension<CurrentUser>| async move {
                    Json(json!({ "firstName": current.user.first_name.as_str() }))
                }),
            )
            .route_layer(from_fn_with_state(
                guard,
                require_session::<MemoryUserRepository>,
            ));

        auth_router(repo, Arc::new(RecordingMailer::default()), config).merge(protected)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_with_token(uri: &str, token: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn ada() -> Value {
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@x.com",
            "phone": "5551234567"
        })
    }

    #[tokio::test]
    async fn test_create_login_and_guard() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json("/createAccount", ada()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "User created successfully!");
        assert!(!body.to_string().contains("Adce4567"));

        let response = app
            .clone()
            .oneshot(post_json(
                "/login",
                json!({ "firstName": "Ada", "password": "Adce4567" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Login successful");
        let token = body["token"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(get_with_token("/me", &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["firstName"], "Ada");
    }

    #[tokio::test]
    async fn test_duplicate_account_is_conflict() {
        let app = app();
        app.clone()
            .oneshot(post_json("/createAccount", ada()))
            .await
            .unwrap();

        let response = app
            .oneshot(post_json("/createAccount", ada()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_status_codes() {
        let app = app();
        app.clone()
            .oneshot(post_json("/createAccount", ada()))
            .await
            .unwrap();

        let cases = [
            (json!({ "firstName": "Ada" }), StatusCode::BAD_REQUEST),
            (
                json!({ "firstName": "   ", "password": "Adce4567" }),
                StatusCode::BAD_REQUEST,
            ),
            (
                json!({ "firstName": "Grace", "password": "x" }),
                StatusCode::NOT_FOUND,
            ),
            (
                json!({ "firstName": "Ada", "password": "wrong" }),
                StatusCode::UNAUTHORIZED,
            ),
        ];
        for (body, expected) in cases {
            let response = app.clone().oneshot(post_json("/login", body)).await.unwrap();
            assert_eq!(response.status(), expected);
        }
    }

    #[tokio::test]
    async fn test_guard_rejects_bad_credentials_uniformly() {
        let app = app();

        let missing = Request::builder().uri("/me").body(Body::empty()).unwrap();
        let response = app.clone().oneshot(missing).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["detail"], "Authentication failed");

        let response = app
            .clone()
            .oneshot(get_with_token("/me", "not.a-token"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let basic = Request::builder()
            .uri("/me")
            .header(header::AUTHORIZATION, "Basic abc")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(basic).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_into_response_status() {
        let response = AuthError::AccountExists.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = AuthError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = AuthError::Internal("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
