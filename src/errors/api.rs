use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::types::dto::common::ErrorResponse;

/// API error taxonomy.
///
/// A missing credential never reaches a handler: the cookie security scheme
/// rejects it with 401 before extraction. Everything a handler can emit is
/// either a 403 (bad credential or identity mismatch) or a 500 (store
/// failure).
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// Credential present but rejected, or identity mismatch on an owned
    /// resource
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// Store or signing failure
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ApiError {
    /// Create a Forbidden error for a malformed or bad-signature token
    pub fn invalid_token() -> Self {
        ApiError::Forbidden(Json(ErrorResponse {
            error: "invalid_token".to_string(),
            message: "Forbidden: Invalid token.".to_string(),
            status_code: 403,
        }))
    }

    /// Create a Forbidden error for an expired token
    pub fn expired_token() -> Self {
        ApiError::Forbidden(Json(ErrorResponse {
            error: "expired_token".to_string(),
            message: "Forbidden: Token has expired.".to_string(),
            status_code: 403,
        }))
    }

    /// Create a Forbidden error for a claim/query identity mismatch
    pub fn email_mismatch() -> Self {
        ApiError::Forbidden(Json(ErrorResponse {
            error: "email_mismatch".to_string(),
            message: "Forbidden: Invalid token.".to_string(),
            status_code: 403,
        }))
    }

    /// Create an InternalError
    pub fn internal_error(message: String) -> Self {
        ApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ApiError::Forbidden(json) => json.0.message.clone(),
            ApiError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
