use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::models::AccessToken;
use crate::domain::identity::models::AuthContext;
use crate::domain::identity::models::Credential;
use crate::domain::identity::ports::AuthenticationServicePort;
use crate::domain::identity::ports::IdentityRepository;

/// Checks credentials and issues access tokens.
pub struct AuthenticationService<IR>
where
    IR: IdentityRepository,
{
    repository: Arc<IR>,
    authenticator: Arc<Authenticator>,
}

impl<IR> AuthenticationService<IR>
where
    IR: IdentityRepository,
{
    pub fn new(repository: Arc<IR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<IR> AuthenticationServicePort for AuthenticationService<IR>
where
    IR: IdentityRepository,
{
    async fn login(
        &self,
        credential: Credential,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthError> {
        let identity = self
            .repository
            .find_identity_by_username(&credential.username)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Identity lookup failed during login");
                AuthError::Internal(e.to_string())
            })?;

        // Unknown usernames and wrong passwords must be indistinguishable.
        let Some(identity) = identity else {
            self.authenticator.verify_decoy(&credential.password);
            tracing::warn!(username = %credential.username, "Login rejected: unknown username");
            return Err(AuthError::InvalidCredentials);
        };

        let result = self.authenticator.authenticate(
            &credential.password,
            &identity.password_hash,
            identity.username.as_str(),
            now,
        );

        match result {
            Ok(result) => {
                tracing::info!(user_id = %identity.id, "Login succeeded");
                Ok(result.into())
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::warn!(user_id = %identity.id, "Login rejected: wrong password");
                Err(AuthError::InvalidCredentials)
            }
            Err(AuthenticationError::PasswordError(e)) => {
                tracing::error!(
                    user_id = %identity.id,
                    error = %e,
                    "Login rejected: stored password hash is unreadable"
                );
                Err(AuthError::InvalidCredentials)
            }
            Err(AuthenticationError::JwtError(e)) => {
                tracing::error!(user_id = %identity.id, error = %e, "Token generation failed");
                Err(AuthError::Internal(e.to_string()))
            }
        }
    }

    async fn refresh(
        &self,
        context: &AuthContext,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthError> {
        let identity = context.identity();

        self.authenticator
            .issue_token(identity.username.as_str(), now)
            .map(|result| {
                tracing::info!(user_id = %identity.id, "Access token refreshed");
                AccessToken::from(result)
            })
            .map_err(|e| {
                tracing::error!(user_id = %identity.id, error = %e, "Token generation failed");
                AuthError::Internal(e.to_string())
            })
    }
}
