use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Username and plaintext password submitted for login. Never persisted.
#[derive(Clone)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Hand-written so the password never reaches a log line.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Identity attached to a request after its bearer token was validated.
///
/// Only `IdentityResolver` builds one; handlers receive it from the request
/// guard and pass it down explicitly.
#[derive(Debug, Clone)]
pub struct AuthContext {
    identity: User,
}

impl AuthContext {
    pub(crate) fn new(identity: User) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &User {
        &self.identity
    }

    pub fn user_id(&self) -> UserId {
        self.identity.id
    }
}

/// A freshly issued bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl From<auth::AuthenticationResult> for AccessToken {
    fn from(result: auth::AuthenticationResult) -> Self {
        Self {
            token: result.access_token,
            expires_at: result.expires_at,
        }
    }
}
