//! In-memory credential store
//!
//! Enforces the same uniqueness rules as the PostgreSQL schema.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    bio::Bio, email::Email, phone::Phone, profile_pic::ProfilePicUrl,
    session_token::SessionToken, user_id::UserId,
};
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn modify<F>(&self, user_id: &UserId, f: F) -> Option<User>
    where
        F: FnOnce(&mut User),
    {
        let mut users = self.users.write().await;
        let user = users.iter_mut().find(|u| u.user_id == *user_id)?;
        f(user);
        Some(user.clone())
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|u| u.email == user.email || u.phone == user.phone)
        {
            return Err(AuthError::AccountExists);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.user_id == *user_id).cloned())
    }

    async fn find_by_first_name(&self, first_name: &str) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .filter(|u| u.first_name.as_str() == first_name)
            .min_by_key(|u| u.created_at)
            .cloned())
    }

    async fn exists_by_email_or_phone(&self, email: &Email, phone: &Phone) -> AuthResult<bool> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| u.email == *email || u.phone == *phone))
    }

    async fn update_session_token(
        &self,
        user_id: &UserId,
        token: &SessionToken,
    ) -> AuthResult<()> {
        self.modify(user_id, |u| u.start_session(token.clone()))
            .await;
        Ok(())
    }

    async fn update_profile_picture(
        &self,
        user_id: &UserId,
        url: &ProfilePicUrl,
    ) -> AuthResult<Option<User>> {
        Ok(self
            .modify(user_id, |u| u.set_profile_pic(url.clone()))
            .await)
    }

    async fn update_bio(&self, user_id: &UserId, bio: &Bio) -> AuthResult<Option<User>> {
        Ok(self.modify(user_id, |u| u.set_bio(bio.clone())).await)
    }

    async fn list(&self, offset: i64, limit: i64) -> AuthResult<Vec<User>> {
        let mut users = self.users.read().await.clone();
        users.sort_by_key(|u| (u.created_at, *u.user_id.as_uuid()));
        Ok(users
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::domain::value_object::{
        person_name::PersonName,
        user_password::{RawPassword, UserPassword},
    };

    fn user(first: &str, email: &str, phone: &str) -> User {
        let raw = RawPassword::new("Adce4567".to_string()).unwrap();
        User::new(
            PersonName::new("First name", first).unwrap(),
            PersonName::new("Last name", "Lovelace").unwrap(),
            Email::new(email).unwrap(),
            Phone::new(phone).unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_unique_email_and_phone() {
        let repo = MemoryUserRepository::new();
        repo.create(&user("Ada", "ada@x.com", "5551234567"))
            .await
            .unwrap();

        let same_email = user("Ada", "ada@x.com", "5550000000");
        assert!(matches!(
            repo.create(&same_email).await,
            Err(AuthError::AccountExists)
        ));

        let same_phone = user("Ada", "other@x.com", "5551234567");
        assert!(matches!(
            repo.create(&same_phone).await,
            Err(AuthError::AccountExists)
        ));
    }

    #[tokio::test]
    async fn test_first_name_lookup_returns_earliest() {
        let repo = MemoryUserRepository::new();
        let first = user("Ada", "ada@x.com", "5551234567");
        let mut second = user("Ada", "ada2@x.com", "5550000000");
        second.created_at = first.created_at + chrono::Duration::seconds(1);

        repo.create(&second).await.unwrap();
        repo.create(&first).await.unwrap();

        let found = repo.find_by_first_name("Ada").await.unwrap().unwrap();
        assert_eq!(found.user_id, first.user_id);
        assert!(repo.find_by_first_name("Grace").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_updates_on_missing_user() {
        let repo = MemoryUserRepository::new();
        let bio = Bio::new("hello").unwrap();
        assert!(repo.update_bio(&UserId::new(), &bio).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_pages() {
        let repo = MemoryUserRepository::new();
        for i in 0..5 {
            let mut u = user("Ada", &format!("ada{i}@x.com"), &format!("555000000{i}"));
            u.created_at = Utc::now() + chrono::Duration::seconds(i);
            repo.create(&u).await.unwrap();
        }

        let page = repo.list(2, 2).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].email.as_str(), "ada2@x.com");
        assert_eq!(repo.list(4, 10).await.unwrap().len(), 1);
    }
}
