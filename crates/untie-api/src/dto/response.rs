//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use untie_core::types::UserId;
use untie_entity::session::Session;
use untie_entity::user::{User, UserRole};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always `"success"`.
    pub status: String,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// User summary for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// Email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role.
    pub role: UserRole,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last login.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}

/// Session metadata. Never carries the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// When the session was issued.
    pub created_at: DateTime<Utc>,
    /// When the session stops being accepted.
    pub expires_at: DateTime<Utc>,
    /// Last successful verification.
    pub last_active_at: DateTime<Utc>,
    /// Whether the long lifetime was requested.
    pub remember_me: bool,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            created_at: session.created_at,
            expires_at: session.expires_at,
            last_active_at: session.last_active_at,
            remember_me: session.remember_me,
        }
    }
}

/// The caller's identity and session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// The authenticated user.
    pub user: UserResponse,
    /// The session used for this request.
    pub session: SessionResponse,
}

/// Login or registration result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated user.
    pub user: UserResponse,
    /// When the issued session expires.
    pub expires_at: DateTime<Utc>,
}

/// Workspace status for the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// The signed-in user.
    pub user: UserResponse,
    /// Deployment environment name.
    pub environment: String,
    /// Workspace features enabled in this environment.
    pub features: Vec<String>,
    /// Number of projects the user owns.
    pub project_count: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
