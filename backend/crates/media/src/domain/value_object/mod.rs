//! Value Object Module

pub mod media_type;
pub mod media_url;
pub mod stored_name;
pub mod video_text;

pub use kernel::id::VideoId;
