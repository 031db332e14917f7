//! Profile Use Cases
//!
//! Single-valued fields on the user record: profile picture and bio.
//! Both overwrite unconditionally.

use std::sync::Arc;

use auth::models::{bio::Bio, profile_pic::ProfilePicUrl, user::User, user_id::UserId};
use auth::store::UserRepository;

use crate::application::config::MediaConfig;
use crate::application::upload::{UploadPipeline, UploadedFile};
use crate::domain::repository::MediaStorage;
use crate::error::{MediaError, MediaResult};

/// Upload profile picture use case
pub struct UpdateProfilePictureUseCase<U, S>
where
    U: UserRepository,
    S: MediaStorage,
{
    users: Arc<U>,
    pipeline: UploadPipeline<S>,
}

impl<U, S> UpdateProfilePictureUseCase<U, S>
where
    U: UserRepository,
    S: MediaStorage,
{
    pub fn new(users: Arc<U>, storage: Arc<S>, config: Arc<MediaConfig>) -> Self {
        Self {
            users,
            pipeline: UploadPipeline::new(storage, config),
        }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        file: Option<UploadedFile>,
    ) -> MediaResult<ProfilePicUrl> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(MediaError::NotFound("User not found"));
        }

        let file = file.ok_or(MediaError::NoFile("No image uploaded"))?;
        file.expect_image()?;

        let stored = self.pipeline.store(&file).await?;
        let url = ProfilePicUrl::new(stored.url.into_inner())?;

        let user = self
            .users
            .update_profile_picture(user_id, &url)
            .await?
            .ok_or(MediaError::NotFound("User not found"))?;

        tracing::info!(user_id = %user.user_id, "Profile picture updated");

        Ok(url)
    }
}

/// Set bio use case
pub struct SetBioUseCase<U>
where
    U: UserRepository,
{
    users: Arc<U>,
}

impl<U> SetBioUseCase<U>
where
    U: UserRepository,
{
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, user_id: &UserId, text: String) -> MediaResult<User> {
        let bio = Bio::new(text)?;

        let user = self
            .users
            .update_bio(user_id, &bio)
            .await?
            .ok_or(MediaError::NotFound("User not found"))?;

        tracing::info!(user_id = %user.user_id, "Bio updated");

        Ok(user)
    }
}
