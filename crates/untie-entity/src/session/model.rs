//! Session entity model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use untie_core::types::UserId;

/// A live login session keyed by an opaque bearer token.
///
/// Sessions are created on login and removed on logout, on the first lookup
/// after expiry, or by the cleanup sweep.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque token presented by the client.
    #[serde(default, skip_serializing)]
    pub token: String,
    /// The user this session belongs to.
    pub user_id: UserId,
    /// When the session was issued.
    pub created_at: DateTime<Utc>,
    /// When the session stops being valid.
    pub expires_at: DateTime<Utc>,
    /// Last successful verification.
    pub last_active_at: DateTime<Utc>,
    /// Whether the long "remember me" lifetime was requested.
    pub remember_me: bool,
}

impl Session {
    /// Whether the session is expired at `now`. Expiry is inclusive.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whole seconds between issue and expiry, used as the cookie `Max-Age`.
    pub fn lifetime_seconds(&self) -> i64 {
        (self.expires_at - self.created_at).num_seconds().max(0)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("user_id", &self.user_id)
            .field("created_at", &self.created_at)
            .field("expires_at", &self.expires_at)
            .field("last_active_at", &self.last_active_at)
            .field("remember_me", &self.remember_me)
            .finish()
    }
}
