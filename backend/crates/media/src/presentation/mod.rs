//! Presentation Layer
//!
//! HTTP handlers, DTOs, multipart parsing and router.

pub mod dto;
pub mod handlers;
pub mod multipart;
pub mod router;

pub use handlers::MediaAppState;
pub use router::media_router;
