//! End-to-end tests against the assembled router

use std::sync::Arc;

use auth::{AuthConfig, MemoryUserRepository};
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use media::{LocalDiskStorage, MediaConfig, MemoryMediaStorage, MemoryVideoRepository};
use platform::mail::LogMailer;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::app::{AppMailer, Services, build_router};

const BOUNDARY: &str = "api-test-boundary";

fn app() -> Router {
    let services = Services {
        users: Arc::new(MemoryUserRepository::new()),
        videos: Arc::new(MemoryVideoRepository::new()),
        storage: Arc::new(MemoryMediaStorage::new()),
        mailer: Arc::new(AppMailer::Log(LogMailer)),
        auth: Arc::new(AuthConfig::from_secret(b"test-secret".to_vec())),
        media: Arc::new(MediaConfig::development()),
    };
    build_router(services, None)
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

async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/login",
            json!({ "firstName": "Ada", "password": "Adce4567" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string()
}

fn profile_picture_upload(token: &str, bytes: Vec<u8>) -> Request<Body> {
    named_picture_upload(token, "ada.jpg", "image/jpeg", bytes)
}

fn named_picture_upload(
    token: &str,
    file_name: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(&bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("PATCH")
        .uri("/api/uploadProfilePicture")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_account_to_profile_picture() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json("/api/createAccount", ada()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let token = login(&app).await;

    let response = app
        .clone()
        .oneshot(profile_picture_upload(&token, vec![0xFF; 2 * 1024 * 1024]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let url = body_json(response).await["profilePicUrl"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(url.starts_with("http://localhost:5000/image/"));
    assert!(url.ends_with("-ada.jpg"));

    let response = app
        .clone()
        .oneshot(get_with_token("/api/getProfilePic", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["profilePicUrl"], url);
}

#[tokio::test]
async fn test_second_login_invalidates_first_token() {
    let app = app();
    app.clone()
        .oneshot(post_json("/api/createAccount", ada()))
        .await
        .unwrap();

    let first = login(&app).await;
    let second = login(&app).await;

    let response = app
        .clone()
        .oneshot(get_with_token("/api/getUserInfo", &first))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(get_with_token("/api/getUserInfo", &second))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["user"]["firstName"], "Ada");
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let app = app();
    app.clone()
        .oneshot(post_json("/api/createAccount", ada()))
        .await
        .unwrap();

    let mut again = ada();
    again["phone"] = json!("5550000000");
    let response = app
        .oneshot(post_json("/api/createAccount", again))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await["detail"],
        "User with this email or phone already exists"
    );
}

#[tokio::test]
async fn test_listing_is_public() {
    let app = app();
    app.clone()
        .oneshot(post_json("/api/createAccount", ada()))
        .await
        .unwrap();

    let request = Request::builder()
        .uri("/api/getAllUsersWithContent?page=1&limit=10")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["limit"], 10);
    assert_eq!(body["users"][0]["firstName"], "Ada");
    assert_eq!(body["users"][0]["videoCount"], 0);
}

#[tokio::test]
async fn test_health_and_fallback() {
    let app = app();

    let health = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(health).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let unknown = Request::builder()
        .uri("/api/nowhere")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(unknown).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "fail", "message": "Route not Found" })
    );
}

#[tokio::test]
async fn test_uploaded_file_names_resolve_on_disk() {
    let root = std::env::temp_dir().join(format!("api-media-{}", uuid::Uuid::new_v4()));
    let storage = LocalDiskStorage::new(root.clone());
    storage.ensure_buckets().await.unwrap();

    let services = Services {
        users: Arc::new(MemoryUserRepository::new()),
        videos: Arc::new(MemoryVideoRepository::new()),
        storage: Arc::new(storage),
        mailer: Arc::new(AppMailer::Log(LogMailer)),
        auth: Arc::new(AuthConfig::from_secret(b"test-secret".to_vec())),
        media: Arc::new(MediaConfig::development()),
    };
    let app = build_router(services, Some(root.as_path()));

    let response = app
        .clone()
        .oneshot(post_json("/api/createAccount", ada()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let token = login(&app).await;

    let long_name = "a".repeat(260) + ".png";
    for file_name in ["ada.png", "clip#1.png", "my pic.png", long_name.as_str()] {
        let bytes = format!("bytes of {file_name}").into_bytes();
        let response = app
            .clone()
            .oneshot(named_picture_upload(&token, file_name, "image/png", bytes.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{file_name}");

        let url = body_json(response).await["profilePicUrl"]
            .as_str()
            .unwrap()
            .to_string();
        let path = url.strip_prefix("http://localhost:5000").unwrap();

        let fetch = Request::builder().uri(path).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(fetch).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        let served = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(served.as_ref(), bytes.as_slice());
    }

    tokio::fs::remove_dir_all(&root).await.unwrap();
}
