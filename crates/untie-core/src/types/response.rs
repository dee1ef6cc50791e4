//! Response envelopes for API endpoints.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `"error"`.
    pub status: String,
    /// Stable machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

impl From<&AppError> for ApiErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            status: "error".to_string(),
            error: err.kind.code().to_string(),
            message: err.message.clone(),
        }
    }
}
