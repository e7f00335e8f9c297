use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Identity claim submitted at login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct IssueTokenRequest {
    /// Email of the caller; becomes the token's identity claim
    pub email: String,
}

/// Acknowledgement for token issue and revoke operations
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AuthAck {
    /// Whether the operation succeeded
    pub success: bool,
}
