//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::queries::UserWithContent;
use crate::domain::entity::video::Video;
use auth::models::user::User;

// ============================================================================
// Profile Picture / Bio
// ============================================================================

/// Profile picture response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePicResponse {
    pub message: String,
    pub profile_pic_url: String,
}

/// Bio request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BioRequest {
    pub bio: String,
}

/// Bio response
#[derive(Debug, Clone, Serialize)]
pub struct BioResponse {
    pub message: String,
    pub bio: String,
}

// ============================================================================
// Video
// ============================================================================

/// Created video record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDto {
    pub id: Uuid,
    /// Owning user
    pub user: Uuid,
    /// Public URL of the file
    pub video: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Video> for VideoDto {
    fn from(video: &Video) -> Self {
        Self {
            id: *video.video_id.as_uuid(),
            user: *video.owner.as_uuid(),
            video: video.video_url.as_str().to_string(),
            title: video.title.as_str().to_string(),
            description: video.description.as_str().to_string(),
            created_at: video.created_at,
            updated_at: video.updated_at,
        }
    }
}

/// Video upload response
#[derive(Debug, Clone, Serialize)]
pub struct VideoResponse {
    pub message: String,
    pub data: VideoDto,
}

// ============================================================================
// User Info
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub profile_pic: Option<String>,
    pub bio: Option<String>,
}

impl From<&User> for UserInfoDto {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.as_str().to_string(),
            last_name: user.last_name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            phone: user.phone.as_str().to_string(),
            profile_pic: user.profile_pic.as_ref().map(|p| p.as_str().to_string()),
            bio: user.bio.as_ref().map(|b| b.as_str().to_string()),
        }
    }
}

/// User info response
#[derive(Debug, Clone, Serialize)]
pub struct UserInfoResponse {
    pub message: String,
    pub user: UserInfoDto,
}

// ============================================================================
// Listing
// ============================================================================

/// `?page=&limit=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummaryDto {
    pub title: String,
    pub video_url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContentDto {
    pub id: Uuid,
    pub first_name: String,
    pub profile_pic: Option<String>,
    pub video_count: usize,
    pub videos: Vec<VideoSummaryDto>,
}

impl From<&UserWithContent> for UserContentDto {
    fn from(entry: &UserWithContent) -> Self {
        Self {
            id: *entry.user.user_id.as_uuid(),
            first_name: entry.user.first_name.as_str().to_string(),
            profile_pic: entry
                .user
                .profile_pic
                .as_ref()
                .map(|p| p.as_str().to_string()),
            video_count: entry.videos.len(),
            videos: entry
                .videos
                .iter()
                .map(|v| VideoSummaryDto {
                    title: v.title.as_str().to_string(),
                    video_url: v.video_url.as_str().to_string(),
                })
                .collect(),
        }
    }
}

/// Listing response
#[derive(Debug, Clone, Serialize)]
pub struct UsersWithContentResponse {
    pub message: String,
    pub page: i64,
    pub limit: i64,
    pub users: Vec<UserContentDto>,
}
