//! Video Entity
//!
//! An uploaded video owned by exactly one user. Immutable once created.

use auth::models::user_id::UserId;
use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    VideoId,
    media_url::MediaUrl,
    video_text::{Description, Title},
};

#[derive(Debug, Clone)]
pub struct Video {
    pub video_id: VideoId,
    /// Owning user
    pub owner: UserId,
    pub video_url: MediaUrl,
    pub title: Title,
    pub description: Description,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Video {
    pub fn new(owner: UserId, video_url: MediaUrl, title: Title, description: Description) -> Self {
        let now = Utc::now();
        Self {
            video_id: VideoId::new(),
            owner,
            video_url,
            title,
            description,
            created_at: now,
            updated_at: now,
        }
    }
}
