use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Raised for unparseable hashes. Never implies the password matched.
    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
