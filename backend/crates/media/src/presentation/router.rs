//! Media Router

use std::sync::Arc;

use auth::middleware::{AccessGuardState, require_session};
use auth::store::UserRepository;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, patch, post},
};

use crate::application::config::MediaConfig;
use crate::domain::repository::{MediaStorage, VideoRepository};
use crate::presentation::handlers::{self, MediaAppState};

/// Create the Media router
///
/// Everything except `/getAllUsersWithContent` sits behind the access guard.
pub fn media_router<U, V, S>(
    users: Arc<U>,
    videos: Arc<V>,
    storage: Arc<S>,
    config: Arc<MediaConfig>,
    guard: AccessGuardState<U>,
) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    V: VideoRepository + Clone + Send + Sync + 'static,
    S: MediaStorage + Clone + Send + Sync + 'static,
{
    let body_limit = config.body_limit();
    let state = MediaAppState {
        users,
        videos,
        storage,
        config,
    };

    let protected = Router::new()
        .route(
            "/uploadProfilePicture",
            patch(handlers::upload_profile_picture::<U, V, S>),
        )
        .route("/addBio", patch(handlers::add_bio::<U, V, S>))
        .route("/upload-video", post(handlers::upload_video::<U, V, S>))
        .route("/getUserInfo", get(handlers::get_user_info::<U, V, S>))
        .route("/getProfilePic", get(handlers::get_profile_pic::<U, V, S>))
        .route("/getBio", get(handlers::get_bio::<U, V, S>))
        .route_layer(from_fn_with_state(guard, require_session::<U>))
        .layer(DefaultBodyLimit::max(body_limit));

    Router::new()
        .route(
            "/getAllUsersWithContent",
            get(handlers::get_all_users_with_content::<U, V, S>),
        )
        .merge(protected)
        .with_state(state)
}
