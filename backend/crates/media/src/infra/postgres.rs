//! PostgreSQL Repository Implementation

use auth::models::user_id::UserId;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::video::Video;
use crate::domain::repository::VideoRepository;
use crate::domain::value_object::{
    VideoId,
    media_url::MediaUrl,
    video_text::{Description, Title},
};
use crate::error::MediaResult;

/// PostgreSQL-backed video store
#[derive(Clone)]
pub struct PgVideoRepository {
    pool: PgPool,
}

impl PgVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl VideoRepository for PgVideoRepository {
    async fn create(&self, video: &Video) -> MediaResult<()> {
        sqlx::query(
            r#"
            INSERT INTO videos (
                video_id,
                user_id,
                video_url,
                title,
                description,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(video.video_id.as_uuid())
        .bind(video.owner.as_uuid())
        .bind(video.video_url.as_str())
        .bind(video.title.as_str())
        .bind(video.description.as_str())
        .bind(video.created_at)
        .bind(video.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_owners(&self, owners: &[UserId]) -> MediaResult<Vec<Video>> {
        let owners: Vec<Uuid> = owners.iter().map(|id| *id.as_uuid()).collect();

        let rows = sqlx::query_as::<_, VideoRow>(
            r#"
            SELECT
                video_id,
                user_id,
                video_url,
                title,
                description,
                created_at,
                updated_at
            FROM videos
            WHERE user_id = ANY($1)
            ORDER BY created_at, video_id
            "#,
        )
        .bind(&owners)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(VideoRow::into_video).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct VideoRow {
    video_id: Uuid,
    user_id: Uuid,
    video_url: String,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl VideoRow {
    fn into_video(self) -> Video {
        Video {
            video_id: VideoId::from_uuid(self.video_id),
            owner: UserId::from_uuid(self.user_id),
            video_url: MediaUrl::from_db(self.video_url),
            title: Title::from_db(self.title),
            description: Description::from_db(self.description),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
