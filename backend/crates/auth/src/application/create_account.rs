//! Create Account Use Case
//!
//! Registers an identity with a derived password and mails that password to
//! the new user.

use std::sync::Arc;

use platform::mail::Mailer;

use crate::application::account_mail::account_created_mail;
use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    person_name::PersonName,
    phone::Phone,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Create account input
pub struct CreateAccountInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Create account output
#[derive(Debug)]
pub struct CreateAccountOutput {
    pub user: User,
}

/// Create account use case
pub struct CreateAccountUseCase<U, M>
where
    U: UserRepository,
    M: Mailer + Sync + 'static,
{
    user_repo: Arc<U>,
    mailer: Arc<M>,
    config: Arc<AuthConfig>,
}

impl<U, M> CreateAccountUseCase<U, M>
where
    U: UserRepository,
    M: Mailer + Sync + 'static,
{
    pub fn new(user_repo: Arc<U>, mailer: Arc<M>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            mailer,
            config,
        }
    }

    pub async fn execute(&self, input: CreateAccountInput) -> AuthResult<CreateAccountOutput> {
        if [&input.first_name, &input.last_name, &input.email, &input.phone]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(AuthError::Validation("All fields are required".to_string()));
        }

        let email = Email::new(input.email)?;
        let phone = Phone::new(input.phone)?;
        let first_name = PersonName::new("First name", &input.first_name)?;
        let last_name = PersonName::new("Last name", &input.last_name)?;

        if self.user_repo.exists_by_email_or_phone(&email, &phone).await? {
            return Err(AuthError::AccountExists);
        }

        let password = RawPassword::derive(
            first_name.as_str(),
            last_name.as_str(),
            phone.as_str(),
        )?;
        let password_hash = UserPassword::from_raw(&password, self.config.pepper())?;

        let user = User::new(first_name, last_name, email, phone, password_hash);

        // A concurrent registration can still win the race; the unique
        // constraints turn that into AccountExists here.
        self.user_repo.create(&user).await?;

        tracing::info!(user_id = %user.user_id, "Account created");

        let mail = account_created_mail(&user.email, &password);
        let mailer = Arc::clone(&self.mailer);
        tokio::spawn(async move {
            if let Err(e) = mailer.send(mail).await {
                tracing::error!(error = %e, "Failed to send account mail");
            }
        });

        Ok(CreateAccountOutput { user })
    }
}
