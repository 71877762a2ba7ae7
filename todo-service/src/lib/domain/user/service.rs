use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::identity::ports::IdentityRepository;
use crate::domain::identity::AuthContext;
use crate::domain::identity::AuthorizationPolicy;
use crate::domain::page::Page;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// The repository serves both the user aggregate and the identity lookups
/// used for uniqueness checks at registration.
pub struct UserService<UR>
where
    UR: UserRepository + IdentityRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository + IdentityRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository + IdentityRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let existing = self
            .repository
            .find_identity_by_username_or_email(command.username.as_str(), command.email.as_str())
            .await?;

        if let Some(existing) = existing {
            tracing::debug!(existing_id = %existing.id, "Registration conflicts with existing user");
            return Err(if existing.username == command.username {
                UserError::UsernameAlreadyExists(command.username.to_string())
            } else {
                UserError::EmailAlreadyExists(command.email.to_string())
            });
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = NewUser {
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User created");

        Ok(created_user)
    }

    async fn list_users(&self, page: Page) -> Result<Vec<User>, UserError> {
        self.repository.list(page).await
    }

    async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    async fn update_user(
        &self,
        context: &AuthContext,
        id: UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        AuthorizationPolicy::ensure_can_modify(context, id)?;

        // The caller is the target, so the resolved identity is the current row.
        let mut user = context.identity().clone();
        user.username = command.username;
        user.email = command.email;
        user.password_hash = self.password_hasher.hash(&command.password)?;
        user.updated_at = Utc::now();

        let updated_user = self.repository.update(user).await?;
        tracing::info!(user_id = %updated_user.id, "User updated");

        Ok(updated_user)
    }

    async fn delete_user(&self, context: &AuthContext, id: UserId) -> Result<(), UserError> {
        AuthorizationPolicy::ensure_can_modify(context, id)?;

        self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
