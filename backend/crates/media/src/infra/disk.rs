//! Local disk storage
//!
//! Buckets are subdirectories of the media root: `<root>/image`,
//! `<root>/video`.

use std::path::{Path, PathBuf};

use crate::domain::repository::MediaStorage;
use crate::domain::value_object::media_type::Bucket;
use crate::error::MediaResult;

#[derive(Debug, Clone)]
pub struct LocalDiskStorage {
    root: PathBuf,
}

impl LocalDiskStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bucket_dir(&self, bucket: Bucket) -> PathBuf {
        self.root.join(bucket.as_str())
    }

    /// Create every bucket directory
    pub async fn ensure_buckets(&self) -> MediaResult<()> {
        for bucket in [Bucket::Image, Bucket::Video] {
            tokio::fs::create_dir_all(self.bucket_dir(bucket)).await?;
        }
        Ok(())
    }
}

impl MediaStorage for LocalDiskStorage {
    async fn put(&self, bucket: Bucket, name: &str, bytes: &[u8]) -> MediaResult<()> {
        let dir = self.bucket_dir(bucket);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(name), bytes).await?;
        Ok(())
    }

    async fn get(&self, bucket: Bucket, name: &str) -> MediaResult<Option<Vec<u8>>> {
        match tokio::fs::read(self.bucket_dir(bucket).join(name)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root() -> PathBuf {
        std::env::temp_dir().join(format!("media-disk-{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let root = temp_root();
        let storage = LocalDiskStorage::new(&root);

        storage
            .put(Bucket::Image, "1-avatar.png", b"\x89PNG")
            .await
            .unwrap();

        assert!(root.join("image").join("1-avatar.png").exists());
        assert_eq!(
            storage.get(Bucket::Image, "1-avatar.png").await.unwrap(),
            Some(b"\x89PNG".to_vec())
        );
        assert_eq!(storage.get(Bucket::Video, "1-avatar.png").await.unwrap(), None);

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_buckets() {
        let root = temp_root();
        let storage = LocalDiskStorage::new(&root);
        storage.ensure_buckets().await.unwrap();
        assert!(storage.bucket_dir(Bucket::Image).is_dir());
        assert!(storage.bucket_dir(Bucket::Video).is_dir());
        tokio::fs::remove_dir_all(&root).await.unwrap();
    }
}
