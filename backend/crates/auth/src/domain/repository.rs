//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{
    bio::Bio, email::Email, phone::Phone, profile_pic::ProfilePicUrl,
    session_token::SessionToken, user_id::UserId,
};
use crate::error::AuthResult;

/// Credential store
///
/// Every mutation touches a single record atomically.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    ///
    /// Fails with `AccountExists` when the email or phone is taken.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find the earliest-created user with this first name
    async fn find_by_first_name(&self, first_name: &str) -> AuthResult<Option<User>>;

    /// Check whether the email or the phone is already registered
    async fn exists_by_email_or_phone(&self, email: &Email, phone: &Phone) -> AuthResult<bool>;

    /// Replace the current session token
    async fn update_session_token(&self, user_id: &UserId, token: &SessionToken)
    -> AuthResult<()>;

    /// Overwrite the profile picture, returning the updated user
    async fn update_profile_picture(
        &self,
        user_id: &UserId,
        url: &ProfilePicUrl,
    ) -> AuthResult<Option<User>>;

    /// Overwrite the bio, returning the updated user
    async fn update_bio(&self, user_id: &UserId, bio: &Bio) -> AuthResult<Option<User>>;

    /// Page through users ordered by creation time
    async fn list(&self, offset: i64, limit: i64) -> AuthResult<Vec<User>>;
}
