//! Media Type Value Object
//!
//! Uploads are classified by their declared content type. Only four types
//! are accepted; each routes to one storage bucket.

use derive_more::Display;

/// Accepted declared content types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Jpeg,
    Png,
    Svg,
    Mp4,
}

/// Storage location class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Bucket {
    #[display("image")]
    Image,
    #[display("video")]
    Video,
}

impl MediaType {
    /// Classify a declared content type, `None` when not accepted
    pub fn from_declared(content_type: &str) -> Option<Self> {
        match content_type {
            "image/jpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/svg+xml" => Some(Self::Svg),
            "video/mp4" => Some(Self::Mp4),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
            Self::Mp4 => "video/mp4",
        }
    }

    /// Route by type family: any `image/*` to images, exactly MP4 to videos
    pub fn bucket(&self) -> Bucket {
        if self.as_str().starts_with("image/") {
            Bucket::Image
        } else {
            Bucket::Video
        }
    }

    pub fn is_image(&self) -> bool {
        self.bucket() == Bucket::Image
    }
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}
