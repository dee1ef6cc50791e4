//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use untie_core::traits::Entity;
use untie_core::types::UserId;

use super::role::UserRole;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier. Never reused.
    pub id: UserId,
    /// Login email, stored in normalized form.
    pub email: String,
    /// Human-readable display name.
    pub name: String,
    /// User role.
    pub role: UserRole,
    /// Argon2 password hash (PHC string).
    #[serde(default, skip_serializing)]
    pub password_hash: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Build a new user with a fresh identifier.
    pub fn new(
        email: &str,
        name: impl Into<String>,
        role: UserRole,
        password_hash: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: UserId::new(),
            email: normalize_email(email),
            name: name.into(),
            role,
            password_hash,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl Entity for User {
    type Id = UserId;
    const KIND: &'static str = "user";

    fn id(&self) -> UserId {
        self.id
    }
}

/// Canonical form of an email address used as the uniqueness key.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
