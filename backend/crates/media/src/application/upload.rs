//! Upload Pipeline
//!
//! Turns a classified upload into a stored file and its public URL.
//! Nothing here touches user or video records.

use std::sync::Arc;

use crate::application::config::MediaConfig;
use crate::domain::repository::MediaStorage;
use crate::domain::value_object::{
    media_type::{Bucket, MediaType},
    media_url::MediaUrl,
    stored_name::StoredName,
};
use crate::error::{MediaError, MediaResult};

/// A file received under the expected multipart field
///
/// The type is classified while the body is read, so only accepted types
/// reach this point.
#[derive(Clone)]
pub struct UploadedFile {
    pub media_type: MediaType,
    pub original_name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedFile")
            .field("media_type", &self.media_type)
            .field("original_name", &self.original_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl UploadedFile {
    /// Profile pictures accept any image type
    pub fn expect_image(&self) -> MediaResult<()> {
        if !self.media_type.is_image() {
            return Err(MediaError::WrongMediaKind("Only image files are allowed"));
        }
        Ok(())
    }

    /// Videos accept MP4 only
    pub fn expect_mp4(&self) -> MediaResult<()> {
        if self.media_type != MediaType::Mp4 {
            return Err(MediaError::WrongMediaKind("Only MP4 format is allowed"));
        }
        Ok(())
    }
}

/// A file that has been durably written
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub bucket: Bucket,
    pub name: StoredName,
    pub url: MediaUrl,
}

/// Stores files and synthesizes their URLs
pub struct UploadPipeline<S>
where
    S: MediaStorage,
{
    storage: Arc<S>,
    config: Arc<MediaConfig>,
}

impl<S> UploadPipeline<S>
where
    S: MediaStorage,
{
    pub fn new(storage: Arc<S>, config: Arc<MediaConfig>) -> Self {
        Self { storage, config }
    }

    pub async fn store(&self, file: &UploadedFile) -> MediaResult<StoredFile> {
        if file.bytes.len() > self.config.max_file_bytes {
            return Err(MediaError::PayloadTooLarge);
        }

        let bucket = file.media_type.bucket();
        let name = StoredName::new(&file.original_name)?;

        self.storage.put(bucket, name.as_str(), &file.bytes).await?;

        let url = MediaUrl::build(&self.config.base_url, bucket, &name);

        tracing::debug!(
            bucket = %bucket,
            name = %name.as_str(),
            bytes = file.bytes.len(),
            "Stored upload"
        );

        Ok(StoredFile { bucket, name, url })
    }
}
