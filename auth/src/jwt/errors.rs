use thiserror::Error;

/// Error type for token encoding and decoding.
///
/// The decode variants stay distinct so callers and tests can tell them
/// apart, even though the request guard reports all of them the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature does not match")]
    BadSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Missing required claim: {0}")]
    MissingClaim(String),
}
