//! HTTP Handlers

use std::sync::Arc;

use auth::middleware::CurrentUser;
use auth::store::UserRepository;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Multipart, Query, State, multipart::MultipartRejection};
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::application::config::MediaConfig;
use crate::application::{
    ListUsersWithContentUseCase, Page, ProfileQueries, SetBioUseCase,
    UpdateProfilePictureUseCase, UploadVideoInput, UploadVideoUseCase,
};
use crate::domain::repository::{MediaStorage, VideoRepository};
use crate::error::{MediaError, MediaResult};
use crate::presentation::dto::{
    BioRequest, BioResponse, ListQuery, ProfilePicResponse, UserContentDto, UserInfoDto,
    UserInfoResponse, UsersWithContentResponse, VideoDto, VideoResponse,
};
use crate::presentation::multipart::read_upload_form;

/// Multipart field carrying a profile picture
pub const IMAGE_FIELD: &str = "image";
/// Multipart field carrying a video
pub const VIDEO_FIELD: &str = "video";

/// Shared state for media handlers
#[derive(Clone)]
pub struct MediaAppState<U, V, S>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    V: VideoRepository + Clone + Send + Sync + 'static,
    S: MediaStorage + Clone + Send + Sync + 'static,
{
    pub users: Arc<U>,
    pub videos: Arc<V>,
    pub storage: Arc<S>,
    pub config: Arc<MediaConfig>,
}

fn multipart_body(body: Result<Multipart, MultipartRejection>) -> MediaResult<Multipart> {
    body.map_err(|rejection| MediaError::Validation(rejection.body_text()))
}

// ============================================================================
// Profile Picture
// ============================================================================

/// PATCH /api/uploadProfilePicture
pub async fn upload_profile_picture<U, V, S>(
    State(state): State<MediaAppState<U, V, S>>,
    Extension(current): Extension<CurrentUser>,
    body: Result<Multipart, MultipartRejection>,
) -> MediaResult<Json<ProfilePicResponse>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    V: VideoRepository + Clone + Send + Sync + 'static,
    S: MediaStorage + Clone + Send + Sync + 'static,
{
    let form = read_upload_form(
        multipart_body(body)?,
        IMAGE_FIELD,
        state.config.max_file_bytes,
    )
    .await?;

    let use_case = UpdateProfilePictureUseCase::new(
        state.users.clone(),
        state.storage.clone(),
        state.config.clone(),
    );
    let url = use_case.execute(&current.user_id, form.file).await?;

    Ok(Json(ProfilePicResponse {
        message: "Profile picture updated successfully".to_string(),
        profile_pic_url: url.into_inner(),
    }))
}

// ============================================================================
// Bio
// ============================================================================

/// PATCH /api/addBio
pub async fn add_bio<U, V, S>(
    State(state): State<MediaAppState<U, V, S>>,
    Extension(current): Extension<CurrentUser>,
    body: Result<Json<BioRequest>, JsonRejection>,
) -> MediaResult<Json<BioResponse>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    V: VideoRepository + Clone + Send + Sync + 'static,
    S: MediaStorage + Clone + Send + Sync + 'static,
{
    let Json(req) = body.map_err(|rejection| MediaError::Validation(rejection.body_text()))?;

    let user = SetBioUseCase::new(state.users.clone())
        .execute(&current.user_id, req.bio)
        .await?;

    Ok(Json(BioResponse {
        message: "Bio updated successfully".to_string(),
        bio: user.bio.map(|b| b.into_inner()).unwrap_or_default(),
    }))
}

// ============================================================================
// Video
// ============================================================================

/// POST /api/upload-video
pub async fn upload_video<U, V, S>(
    State(state): State<MediaAppState<U, V, S>>,
    Extension(current): Extension<CurrentUser>,
    body: Result<Multipart, MultipartRejection>,
) -> MediaResult<(StatusCode, Json<VideoResponse>)>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    V: VideoRepository + Clone + Send + Sync + 'static,
    S: MediaStorage + Clone + Send + Sync + 'static,
{
    let form = read_upload_form(
        multipart_body(body)?,
        VIDEO_FIELD,
        state.config.max_file_bytes,
    )
    .await?;

    let input = UploadVideoInput {
        title: form.field("title"),
        description: form.field("description"),
        file: form.file,
    };

    let use_case = UploadVideoUseCase::new(
        state.users.clone(),
        state.videos.clone(),
        state.storage.clone(),
        state.config.clone(),
    );
    let video = use_case.execute(&current.user_id, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(VideoResponse {
            message: "Video uploaded successfully!".to_string(),
            data: VideoDto::from(&video),
        }),
    ))
}

// ============================================================================
// Reads
// ============================================================================

/// GET /api/getUserInfo
pub async fn get_user_info<U, V, S>(
    State(state): State<MediaAppState<U, V, S>>,
    Extension(current): Extension<CurrentUser>,
) -> MediaResult<Json<UserInfoResponse>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    V: VideoRepository + Clone + Send + Sync + 'static,
    S: MediaStorage + Clone + Send + Sync + 'static,
{
    let user = ProfileQueries::new(state.users.clone())
        .user_info(&current.user_id)
        .await?;

    Ok(Json(UserInfoResponse {
        message: "User information retrieved successfully".to_string(),
        user: UserInfoDto::from(&user),
    }))
}

/// GET /api/getProfilePic
pub async fn get_profile_pic<U, V, S>(
    State(state): State<MediaAppState<U, V, S>>,
    Extension(current): Extension<CurrentUser>,
) -> MediaResult<Json<ProfilePicResponse>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    V: VideoRepository + Clone + Send + Sync + 'static,
    S: MediaStorage + Clone + Send + Sync + 'static,
{
    let url = ProfileQueries::new(state.users.clone())
        .profile_pic(&current.user_id)
        .await?;

    Ok(Json(ProfilePicResponse {
        message: "Profile picture retrieved successfully".to_string(),
        profile_pic_url: url,
    }))
}

/// GET /api/getBio
pub async fn get_bio<U, V, S>(
    State(state): State<MediaAppState<U, V, S>>,
    Extension(current): Extension<CurrentUser>,
) -> MediaResult<Json<BioResponse>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    V: VideoRepository + Clone + Send + Sync + 'static,
    S: MediaStorage + Clone + Send + Sync + 'static,
{
    let bio = ProfileQueries::new(state.users.clone())
        .bio(&current.user_id)
        .await?;

    Ok(Json(BioResponse {
        message: "Bio retrieved successfully".to_string(),
        bio,
    }))
}

/// GET /api/getAllUsersWithContent
pub async fn get_all_users_with_content<U, V, S>(
    State(state): State<MediaAppState<U, V, S>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> MediaResult<Json<UsersWithContentResponse>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    V: VideoRepository + Clone + Send + Sync + 'static,
    S: MediaStorage + Clone + Send + Sync + 'static,
{
    let Query(query) = query.map_err(|rejection| MediaError::Validation(rejection.body_text()))?;
    let page = Page::new(query.page, query.limit);

    let entries = ListUsersWithContentUseCase::new(state.users.clone(), state.videos.clone())
        .execute(page)
        .await?;

    Ok(Json(UsersWithContentResponse {
        message: "Users retrieved successfully".to_string(),
        page: page.page,
        limit: page.limit,
        users: entries.iter().map(UserContentDto::from).collect(),
    }))
}
