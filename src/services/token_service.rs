use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use std::fmt;

use crate::errors::ApiError;
use crate::types::internal::auth::Claims;

/// Signs and verifies the session credential.
///
/// The token itself is the full session state: an HS256 JWT carrying the
/// caller's email claim and a fixed expiry. There is no server-side session
/// store and no revocation list.
pub struct TokenService {
    jwt_secret: String,
    token_expiration_days: i64,
}

impl TokenService {
    /// Create a new TokenService with the given signing secret
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret,
            token_expiration_days: 1,
        }
    }

    /// Sign a credential for the given identity claim
    ///
    /// # Arguments
    /// * `email` - The caller's email, embedded as the identity claim
    ///
    /// # Returns
    /// * `Result<String, ApiError>` - The encoded JWT or an error
    pub fn issue(&self, email: &str) -> Result<String, ApiError> {
        let now = Utc::now().timestamp();
        let expiration = now + (self.token_expiration_days * 24 * 60 * 60);

        let claims = Claims {
            email: email.to_string(),
            exp: expiration,
            iat: now,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| ApiError::internal_error(format!("Failed to sign token: {}", e)))?;

        Ok(token)
    }

    /// Verify a credential and return the decoded claims
    ///
    /// # Arguments
    /// * `token` - The JWT taken from the `token` cookie
    ///
    /// # Returns
    /// * `Result<Claims, ApiError>` - The decoded claims, or Forbidden when
    ///   the token is expired, malformed, or carries a bad signature
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => ApiError::expired_token(),
            _ => ApiError::invalid_token(),
        })?;

        Ok(token_data.claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("jwt_secret", &"<redacted>")
            .field("token_expiration_days", &self.token_expiration_days)
            .finish()
    }
}
