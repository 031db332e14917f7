//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random bytes, constant-time compare, Base64)
//! - Password hashing (Argon2id)
//! - Bearer credential extraction
//! - Outbound mail delivery

pub mod bearer;
pub mod crypto;
pub mod mail;
pub mod password;
