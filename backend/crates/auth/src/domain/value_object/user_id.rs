//! User ID
//!
//! Identity identifiers are the kernel's typed UUIDs.

pub use kernel::id::UserId;
