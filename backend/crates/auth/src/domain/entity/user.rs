//! User Entity
//!
//! An account record: identity fields, credential hash, optional profile
//! content and the single current session token.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    bio::Bio, email::Email, person_name::PersonName, phone::Phone, profile_pic::ProfilePicUrl,
    session_token::SessionToken, user_id::UserId, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    /// Unique, lower-cased
    pub email: Email,
    /// Unique
    pub phone: Phone,
    /// Argon2id hash of the derived password
    pub password_hash: UserPassword,
    pub bio: Option<Bio>,
    pub profile_pic: Option<ProfilePicUrl>,
    /// Empty when no session is active
    pub session_token: SessionToken,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with no session and no profile content
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        email: Email,
        phone: Phone,
        password_hash: UserPassword,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            first_name,
            last_name,
            email,
            phone,
            password_hash,
            bio: None,
            profile_pic: None,
            session_token: SessionToken::none(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the current session, superseding any earlier token
    pub fn start_session(&mut self, token: SessionToken) {
        self.session_token = token;
        self.updated_at = Utc::now();
    }

    /// Whether `presented` is the current session token
    pub fn holds_session(&self, presented: &str) -> bool {
        self.session_token.matches(presented)
    }

    pub fn set_profile_pic(&mut self, url: ProfilePicUrl) {
        self.profile_pic = Some(url);
        self.updated_at = Utc::now();
    }

    pub fn set_bio(&mut self, bio: Bio) {
        self.bio = Some(bio);
        self.updated_at = Utc::now();
    }
}
