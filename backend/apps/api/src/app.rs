//! Router Assembly
//!
//! Wires the auth and media routers under `/api`, the static media buckets,
//! health and the JSON fallback. Generic over every store so tests can run the
//! same surface on in-memory implementations.

use std::path::Path;
use std::sync::Arc;

use auth::store::UserRepository;
use auth::{AuthConfig, access_guard, auth_router};
use axum::http::{self, Method, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use media::domain::repository::{MediaStorage, VideoRepository};
use media::{MediaConfig, media_router};
use platform::mail::{HttpMailer, LogMailer, MailError, Mailer, OutgoingMail};
use serde_json::json;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// The mailer picked at startup
#[derive(Debug, Clone)]
pub enum AppMailer {
    Relay(HttpMailer),
    Log(LogMailer),
}

impl Mailer for AppMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        match self {
            AppMailer::Relay(mailer) => mailer.send(mail).await,
            AppMailer::Log(mailer) => mailer.send(mail).await,
        }
    }
}

/// Stores, collaborators and configuration shared by every route
pub struct Services<U, V, S, M> {
    pub users: Arc<U>,
    pub videos: Arc<V>,
    pub storage: Arc<S>,
    pub mailer: Arc<M>,
    pub auth: Arc<AuthConfig>,
    pub media: Arc<MediaConfig>,
}

/// Build the application router
///
/// With `media_root` set, `/image/*` and `/video/*` serve the stored files.
pub fn build_router<U, V, S, M>(services: Services<U, V, S, M>, media_root: Option<&Path>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    V: VideoRepository + Clone + Send + Sync + 'static,
    S: MediaStorage + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Sync + 'static,
{
    let guard = access_guard(services.users.clone(), services.auth.clone());

    let api = auth_router(services.users.clone(), services.mailer, services.auth).merge(
        media_router(
            services.users,
            services.videos,
            services.storage,
            services.media,
            guard,
        ),
    );

    let mut app = Router::new().route("/health", get(health)).nest("/api", api);

    if let Some(root) = media_root {
        app = app
            .nest_service("/image", ServeDir::new(root.join("image")))
            .nest_service("/video", ServeDir::new(root.join("video")));
    }

    app.fallback(route_not_found)
}

/// Add tracing and CORS around the whole router
pub fn with_http_layers(app: Router, frontend_origins: &[String]) -> Router {
    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    app.layer(TraceLayer::new_for_http()).layer(cors)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "status": "fail", "message": "Route not Found" })),
    )
}
