use thiserror::Error;

use crate::domain::identity::AuthError;
use crate::domain::page::PageError;
use crate::domain::todo::models::TodoId;

/// Error for unknown to-do state names
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoStateError {
    #[error("unknown state: {0}")]
    Unknown(String),
}

/// Top-level error for all to-do operations
#[derive(Debug, Clone, Error)]
pub enum TodoError {
    #[error("Invalid page: {0}")]
    InvalidPage(#[from] PageError),

    #[error("Invalid state: {0}")]
    InvalidState(#[from] TodoStateError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("task not found")]
    NotFound(TodoId),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
