use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::crypto;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::Error as JsonWebTokenError;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Signs and verifies access tokens.
///
/// HS256 over a server-held secret with a fixed time-to-live. Time is always
/// passed in by the caller, the codec never reads the system clock.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a codec for the given secret and token lifetime.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing key (at least 32 bytes for HS256)
    /// * `ttl` - Validity window of every issued token
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `subject`, expiring `ttl` after `now`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn encode(&self, subject: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        self.encode_claims(&Claims::for_subject(subject, now, self.ttl))
    }

    /// Sign an arbitrary claims set.
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, JwtError> {
        encode(&Header::new(self.algorithm), claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Validate a token and return its subject.
    ///
    /// Checks run in order: signature, claim presence, expiry. Claims of a
    /// token whose signature does not verify are never inspected.
    ///
    /// # Errors
    /// * `BadSignature` - Signature or algorithm does not match
    /// * `Malformed` - Not a decodable JWT
    /// * `MissingClaim` - `sub` or `exp` absent
    /// * `Expired` - `now` is at or past `exp`
    pub fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        let claims = self.decode_claims(token)?;

        let subject = claims
            .sub
            .clone()
            .ok_or_else(|| JwtError::MissingClaim("sub".to_string()))?;

        if claims.exp.is_none() {
            return Err(JwtError::MissingClaim("exp".to_string()));
        }

        if claims.is_expired(now) {
            return Err(JwtError::Expired);
        }

        Ok(subject)
    }

    /// Verify the signature and return the claims without any time checks.
    ///
    /// The HMAC over `header.payload` is checked before either segment is
    /// parsed, so altering any byte of a signed token is a `BadSignature`.
    ///
    /// # Errors
    /// * `BadSignature` - Signature or algorithm does not match
    /// * `Malformed` - Not a decodable JWT
    pub fn decode_claims(&self, token: &str) -> Result<Claims, JwtError> {
        self.verify_signature(token)?;

        decode::<Claims>(token, &self.decoding_key, &self.validation())
            .map(|data| data.claims)
            .map_err(map_decode_error)
    }

    fn verify_signature(&self, token: &str) -> Result<(), JwtError> {
        let (message, signature) = token
            .rsplit_once('.')
            .filter(|(message, _)| message.split('.').count() == 2)
            .ok_or_else(|| JwtError::Malformed("expected three segments".to_string()))?;

        let verified = crypto::verify(
            signature,
            message.as_bytes(),
            &self.decoding_key,
            self.algorithm,
        )
        .map_err(map_decode_error)?;

        if !verified {
            return Err(JwtError::BadSignature);
        }
        Ok(())
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked against the caller's clock in `decode`.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        validation
    }
}

fn map_decode_error(err: JsonWebTokenError) -> JwtError {
    match err.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => JwtError::BadSignature,
        ErrorKind::ExpiredSignature => JwtError::Expired,
        ErrorKind::MissingRequiredClaim(claim) => JwtError::MissingClaim(claim.clone()),
        _ => JwtError::Malformed(err.to_string()),
    }
}
