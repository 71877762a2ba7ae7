use thiserror::Error;

/// Authentication and authorization failures.
///
/// The messages are the exact client-facing details. Token decode failures
/// and vanished subjects all surface as `Unauthenticated` so a caller cannot
/// tell which check rejected it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username or wrong password
    #[error("incorrect username or password")]
    InvalidCredentials,

    /// Missing, invalid or expired token, or token for a deleted account
    #[error("could not validate credentials")]
    Unauthenticated,

    /// Valid identity that does not own the target resource
    #[error("not enough permissions")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(String),
}
