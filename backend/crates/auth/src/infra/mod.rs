//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

pub use memory::MemoryUserRepository;
pub use postgres::PgAuthRepository;
