//! Read-side projections
//!
//! Per-user reads for the authenticated caller and the public, paginated
//! listing of every user with their videos.

use std::collections::HashMap;
use std::sync::Arc;

use auth::models::{user::User, user_id::UserId};
use auth::store::UserRepository;

use crate::domain::entity::video::Video;
use crate::domain::repository::VideoRepository;
use crate::error::{MediaError, MediaResult};

pub const DEFAULT_PAGE_LIMIT: i64 = 50;
pub const MAX_PAGE_LIMIT: i64 = 100;

/// 1-based page of the user listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: i64,
    pub limit: i64,
}

impl Page {
    /// Clamp client-supplied paging into range
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit
                .unwrap_or(DEFAULT_PAGE_LIMIT)
                .clamp(1, MAX_PAGE_LIMIT),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Queries over the caller's own record
pub struct ProfileQueries<U>
where
    U: UserRepository,
{
    users: Arc<U>,
}

impl<U> ProfileQueries<U>
where
    U: UserRepository,
{
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    pub async fn user_info(&self, user_id: &UserId) -> MediaResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(MediaError::NotFound("User not found"))
    }

    pub async fn profile_pic(&self, user_id: &UserId) -> MediaResult<String> {
        self.user_info(user_id)
            .await?
            .profile_pic
            .map(|url| url.into_inner())
            .ok_or(MediaError::NotFound("No profile picture found"))
    }

    pub async fn bio(&self, user_id: &UserId) -> MediaResult<String> {
        self.user_info(user_id)
            .await?
            .bio
            .map(|bio| bio.into_inner())
            .ok_or(MediaError::NotFound("No bio found"))
    }
}

/// A user together with the videos they own
#[derive(Debug, Clone)]
pub struct UserWithContent {
    pub user: User,
    pub videos: Vec<Video>,
}

/// List users with content use case
pub struct ListUsersWithContentUseCase<U, V>
where
    U: UserRepository,
    V: VideoRepository,
{
    users: Arc<U>,
    videos: Arc<V>,
}

impl<U, V> ListUsersWithContentUseCase<U, V>
where
    U: UserRepository,
    V: VideoRepository,
{
    pub fn new(users: Arc<U>, videos: Arc<V>) -> Self {
        Self { users, videos }
    }

    /// One query for the page of users, one for all their videos
    pub async fn execute(&self, page: Page) -> MediaResult<Vec<UserWithContent>> {
        let users = self.users.list(page.offset(), page.limit).await?;
        if users.is_empty() {
            return Ok(Vec::new());
        }

        let owners: Vec<UserId> = users.iter().map(|u| u.user_id).collect();
        let mut by_owner: HashMap<UserId, Vec<Video>> = HashMap::new();
        for video in self.videos.find_by_owners(&owners).await? {
            by_owner.entry(video.owner).or_default().push(video);
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let videos = by_owner.remove(&user.user_id).unwrap_or_default();
                UserWithContent { user, videos }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults_and_clamping() {
        assert_eq!(Page::default(), Page { page: 1, limit: 50 });
        assert_eq!(Page::new(Some(0), Some(0)), Page { page: 1, limit: 1 });
        assert_eq!(Page::new(Some(3), Some(500)), Page { page: 3, limit: 100 });
        assert_eq!(Page::new(Some(3), Some(20)).offset(), 40);
    }
}
