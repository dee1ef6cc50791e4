//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use untie_core::types::UserId;
use untie_entity::user::{User, UserRole};

/// Context for the current authenticated request.
///
/// Built by the access gate from a verified session and passed into service
/// methods so every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The user's email at verification time.
    pub email: String,
    /// The user's display name at verification time.
    pub name: String,
    /// The user's role at verification time.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context for `user` acting at `request_time`.
    pub fn new(user: &User, request_time: DateTime<Utc>) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            request_time,
        }
    }
}
