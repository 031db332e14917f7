//! Entities

pub mod user;
