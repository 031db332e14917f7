//! Infrastructure Layer
//!
//! Database and file storage implementations.

pub mod disk;
pub mod memory;
pub mod postgres;

pub use disk::LocalDiskStorage;
pub use memory::{MemoryMediaStorage, MemoryVideoRepository};
pub use postgres::PgVideoRepository;
