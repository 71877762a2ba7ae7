use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::models::AccessToken;
use crate::domain::identity::models::AuthContext;
use crate::domain::identity::models::Credential;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Read-only identity lookups consumed by the authentication services.
#[async_trait]
pub trait IdentityRepository: Send + Sync + 'static {
    /// Retrieve the identity with exactly this username.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_identity_by_username(&self, username: &str) -> Result<Option<User>, UserError>;

    /// Retrieve the identity with this id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_identity_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;

    /// Retrieve an identity matching either the username or the email.
    ///
    /// Used to detect uniqueness conflicts before registration.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_identity_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, UserError>;
}

/// Port for credential checks and token issuance.
#[async_trait]
pub trait AuthenticationServicePort: Send + Sync + 'static {
    /// Exchange a username and password for an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Internal` - Lookup or token signing failed
    async fn login(&self, credential: Credential, now: DateTime<Utc>)
        -> Result<AccessToken, AuthError>;

    /// Issue a new token for an already authenticated caller.
    ///
    /// The token the caller presented stays valid until its own expiry.
    ///
    /// # Errors
    /// * `Internal` - Token signing failed
    async fn refresh(&self, context: &AuthContext, now: DateTime<Utc>)
        -> Result<AccessToken, AuthError>;
}

/// Port for the bearer-token guard in front of protected operations.
#[async_trait]
pub trait IdentityResolverPort: Send + Sync + 'static {
    /// Validate a bearer token and load the identity it names.
    ///
    /// # Errors
    /// * `Unauthenticated` - Token rejected or subject no longer exists
    /// * `Internal` - Lookup failed
    async fn resolve(&self, bearer_token: &str, now: DateTime<Utc>)
        -> Result<AuthContext, AuthError>;
}

/// Source of the current time for token issuance and validation.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
