//! Repository and Storage Traits
//!
//! Interfaces for persistence. Implementations are in the infrastructure layer.

use auth::models::user_id::UserId;

use crate::domain::entity::video::Video;
use crate::domain::value_object::media_type::Bucket;
use crate::error::MediaResult;

/// Video record store
#[trait_variant::make(VideoRepository: Send)]
pub trait LocalVideoRepository {
    /// Create a new video record
    async fn create(&self, video: &Video) -> MediaResult<()>;

    /// All videos owned by any of `owners`, oldest first
    async fn find_by_owners(&self, owners: &[UserId]) -> MediaResult<Vec<Video>>;
}

/// Durable file storage, one namespace per bucket
#[trait_variant::make(MediaStorage: Send)]
pub trait LocalMediaStorage {
    /// Write a complete file
    async fn put(&self, bucket: Bucket, name: &str, bytes: &[u8]) -> MediaResult<()>;

    /// Read a file back, `None` when absent
    async fn get(&self, bucket: Bucket, name: &str) -> MediaResult<Option<Vec<u8>>>;
}
