//! In-memory video store and media storage

use std::collections::HashMap;
use std::sync::Arc;

use auth::models::user_id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::video::Video;
use crate::domain::repository::{MediaStorage, VideoRepository};
use crate::domain::value_object::media_type::Bucket;
use crate::error::MediaResult;

#[derive(Clone, Default)]
pub struct MemoryVideoRepository {
    videos: Arc<RwLock<Vec<Video>>>,
}

impl MemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.videos.read().await.len()
    }
}

impl VideoRepository for MemoryVideoRepository {
    async fn create(&self, video: &Video) -> MediaResult<()> {
        self.videos.write().await.push(video.clone());
        Ok(())
    }

    async fn find_by_owners(&self, owners: &[UserId]) -> MediaResult<Vec<Video>> {
        let videos = self.videos.read().await;
        let mut found: Vec<Video> = videos
            .iter()
            .filter(|v| owners.contains(&v.owner))
            .cloned()
            .collect();
        found.sort_by_key(|v| v.created_at);
        Ok(found)
    }
}

#[derive(Clone, Default)]
pub struct MemoryMediaStorage {
    files: Arc<RwLock<HashMap<(Bucket, String), Vec<u8>>>>,
}

impl MemoryMediaStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.files.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.files.read().await.is_empty()
    }

    /// Names stored in `bucket`
    pub async fn names(&self, bucket: Bucket) -> Vec<String> {
        let files = self.files.read().await;
        let mut names: Vec<String> = files
            .keys()
            .filter(|(b, _)| *b == bucket)
            .map(|(_, name)| name.clone())
            .collect();
        names.sort();
        names
    }
}

impl MediaStorage for MemoryMediaStorage {
    async fn put(&self, bucket: Bucket, name: &str, bytes: &[u8]) -> MediaResult<()> {
        self.files
            .write()
            .await
            .insert((bucket, name.to_string()), bytes.to_vec());
        Ok(())
    }

    async fn get(&self, bucket: Bucket, name: &str) -> MediaResult<Option<Vec<u8>>> {
        Ok(self
            .files
            .read()
            .await
            .get(&(bucket, name.to_string()))
            .cloned())
    }
}
