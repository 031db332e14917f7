//! Upload Video Use Case
//!
//! Stores an MP4 and creates the video record that references it.

use std::sync::Arc;

use auth::models::user_id::UserId;
use auth::store::UserRepository;

use crate::application::config::MediaConfig;
use crate::application::upload::{UploadPipeline, UploadedFile};
use crate::domain::entity::video::Video;
use crate::domain::repository::{MediaStorage, VideoRepository};
use crate::domain::value_object::video_text::{Description, Title};
use crate::error::{MediaError, MediaResult};

/// Upload video input
#[derive(Debug, Default)]
pub struct UploadVideoInput {
    pub file: Option<UploadedFile>,
    pub title: String,
    pub description: String,
}

/// Upload video use case
pub struct UploadVideoUseCase<U, V, S>
where
    U: UserRepository,
    V: VideoRepository,
    S: MediaStorage,
{
    users: Arc<U>,
    videos: Arc<V>,
    pipeline: UploadPipeline<S>,
}

impl<U, V, S> UploadVideoUseCase<U, V, S>
where
    U: UserRepository,
    V: VideoRepository,
    S: MediaStorage,
{
    pub fn new(users: Arc<U>, videos: Arc<V>, storage: Arc<S>, config: Arc<MediaConfig>) -> Self {
        Self {
            users,
            videos,
            pipeline: UploadPipeline::new(storage, config),
        }
    }

    /// Validate, store, then record
    ///
    /// The file is written before the record. If the record write fails the
    /// file stays in storage unreferenced.
    pub async fn execute(&self, user_id: &UserId, input: UploadVideoInput) -> MediaResult<Video> {
        let owner = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(MediaError::NotFound("User not found"))?;

        if input.title.trim().is_empty() || input.description.trim().is_empty() {
            return Err(MediaError::Validation(
                "Title and description are required".to_string(),
            ));
        }

        let file = input.file.ok_or(MediaError::NoFile("No video file uploaded"))?;
        file.expect_mp4()?;

        let title = Title::new(input.title)?;
        let description = Description::new(input.description)?;

        let stored = self.pipeline.store(&file).await?;

        let video = Video::new(owner.user_id, stored.url, title, description);
        self.videos.create(&video).await?;

        tracing::info!(
            user_id = %video.owner,
            video_id = %video.video_id,
            "Video uploaded"
        );

        Ok(video)
    }
}
