//! Value Object Module

pub mod bio;
pub mod email;
pub mod person_name;
pub mod phone;
pub mod profile_pic;
pub mod session_token;
pub mod user_id;
pub mod user_password;
