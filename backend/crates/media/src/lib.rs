//! Media Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Video entity, media value objects, store and storage traits
//! - `application/` - Upload pipeline, record binding and read projections
//! - `infra/` - PostgreSQL, local disk and in-memory implementations
//! - `presentation/` - Multipart parsing, HTTP handlers, DTOs, router
//!
//! ## Upload pipeline
//! 1. Declared type checked against the allow-list (JPEG, PNG, SVG, MP4)
//! 2. Routed to the `image` or `video` bucket; each endpoint also checks kind
//! 3. Capped at 6 MiB per file while reading
//! 4. Stored as `<monotonic ms>-<original name>`
//! 5. Linked as `<base url>/<bucket>/<stored name>`
//!
//! Storage is written before any record. A failed record write leaves the
//! file in place.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::MediaConfig;
pub use error::{MediaError, MediaResult};
pub use infra::{LocalDiskStorage, MemoryMediaStorage, MemoryVideoRepository, PgVideoRepository};
pub use presentation::router::media_router;
