use thiserror::Error;

use crate::domain::identity::AuthError;
use crate::domain::page::PageError;
use crate::domain::user::models::UserId;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),

    #[error("Email too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid page: {0}")]
    InvalidPage(#[from] PageError),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    // Domain-level errors
    #[error("user not found")]
    NotFound(UserId),

    #[error("username already exists")]
    UsernameAlreadyExists(String),

    #[error("email already exists")]
    EmailAlreadyExists(String),

    /// Unique violation on update, where the offending column is not reported
    #[error("username or email already exists")]
    AlreadyExists,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
