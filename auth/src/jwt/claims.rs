use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Access token payload.
///
/// Every field is optional on the wire so that a token lacking a claim still
/// deserializes and can be rejected with a precise `MissingClaim` error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp, seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp, seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Unique token identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims for a freshly issued access token.
    ///
    /// `iat` is `now` truncated to whole seconds and `exp` is `iat + ttl`.
    /// A random `jti` keeps two tokens issued in the same second distinct.
    pub fn for_subject(subject: impl ToString, now: DateTime<Utc>, ttl: Duration) -> Self {
        let issued_at = now.timestamp();

        Self {
            sub: Some(subject.to_string()),
            exp: Some(issued_at + ttl.num_seconds()),
            iat: Some(issued_at),
            jti: Some(Uuid::new_v4().to_string()),
        }
    }

    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// A token is valid only strictly before `exp`.
    ///
    /// Claims without `exp` are never considered expired here; the codec
    /// rejects them as `MissingClaim` before this check runs.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp.map_or(false, |exp| now.timestamp() >= exp)
    }
}
