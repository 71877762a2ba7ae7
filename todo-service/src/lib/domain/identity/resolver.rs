use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::models::AuthContext;
use crate::domain::identity::ports::IdentityRepository;
use crate::domain::identity::ports::IdentityResolverPort;

/// Resolves bearer tokens to the identity they were issued for.
///
/// Every rejection, whatever its cause, surfaces as `Unauthenticated`; the
/// cause is only logged.
pub struct IdentityResolver<IR>
where
    IR: IdentityRepository,
{
    repository: Arc<IR>,
    authenticator: Arc<Authenticator>,
}

impl<IR> IdentityResolver<IR>
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
impl<IR> IdentityResolverPort for IdentityResolver<IR>
where
    IR: IdentityRepository,
{
    async fn resolve(
        &self,
        bearer_token: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthContext, AuthError> {
        let subject = self
            .authenticator
            .validate_token(bearer_token, now)
            .map_err(|e| {
                tracing::warn!(error = %e, "Bearer token rejected");
                AuthError::Unauthenticated
            })?;

        let identity = self
            .repository
            .find_identity_by_username(&subject)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Identity lookup failed during token resolution");
                AuthError::Internal(e.to_string())
            })?
            .ok_or_else(|| {
                tracing::warn!(subject = %subject, "Bearer token names an unknown user");
                AuthError::Unauthenticated
            })?;

        Ok(AuthContext::new(identity))
    }
}
