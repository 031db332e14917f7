//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    bio::Bio, email::Email, person_name::PersonName, phone::Phone, profile_pic::ProfilePicUrl,
    session_token::SessionToken, user_id::UserId, user_password::UserPassword,
};
use crate::error::AuthResult;

const USER_COLUMNS: &str = r#"
    user_id,
    first_name,
    last_name,
    email,
    phone,
    password_hash,
    bio,
    profile_pic,
    session_token,
    created_at,
    updated_at
"#;

/// PostgreSQL-backed credential store
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                first_name,
                last_name,
                email,
                phone,
                password_hash,
                bio,
                profile_pic,
                session_token,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.first_name.as_str())
        .bind(user.last_name.as_str())
        .bind(user.email.as_str())
        .bind(user.phone.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.bio.as_ref().map(Bio::as_str))
        .bind(user.profile_pic.as_ref().map(ProfilePicUrl::as_str))
        .bind(user.session_token.as_str())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_first_name(&self, first_name: &str) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE first_name = $1 ORDER BY created_at, user_id LIMIT 1"
        ))
        .bind(first_name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn exists_by_email_or_phone(&self, email: &Email, phone: &Phone) -> AuthResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 OR phone = $2)",
        )
        .bind(email.as_str())
        .bind(phone.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update_session_token(
        &self,
        user_id: &UserId,
        token: &SessionToken,
    ) -> AuthResult<()> {
        sqlx::query("UPDATE users SET session_token = $2, updated_at = NOW() WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .bind(token.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_profile_picture(
        &self,
        user_id: &UserId,
        url: &ProfilePicUrl,
    ) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET profile_pic = $2, updated_at = NOW() WHERE user_id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(user_id.as_uuid())
        .bind(url.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn update_bio(&self, user_id: &UserId, bio: &Bio) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET bio = $2, updated_at = NOW() WHERE user_id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(user_id.as_uuid())
        .bind(bio.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn list(&self, offset: i64, limit: i64) -> AuthResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at, user_id OFFSET $1 LIMIT $2"
        ))
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    password_hash: String,
    bio: Option<String>,
    profile_pic: Option<String>,
    session_token: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            first_name: PersonName::from_db(self.first_name),
            last_name: PersonName::from_db(self.last_name),
            email: Email::from_db(self.email),
            phone: Phone::from_db(self.phone),
            password_hash: UserPassword::from_phc_string(self.password_hash)?,
            bio: self.bio.map(Bio::from_db),
            profile_pic: self.profile_pic.map(ProfilePicUrl::from_db),
            session_token: SessionToken::new(self.session_token),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
