//! Application Layer
//!
//! Use cases and the upload pipeline.

pub mod config;
pub mod profile;
pub mod queries;
pub mod upload;
pub mod video;

// Re-exports
pub use config::MediaConfig;
pub use profile::{SetBioUseCase, UpdateProfilePictureUseCase};
pub use queries::{ListUsersWithContentUseCase, Page, ProfileQueries, UserWithContent};
pub use upload::{StoredFile, UploadPipeline, UploadedFile};
pub use video::{UploadVideoInput, UploadVideoUseCase};
