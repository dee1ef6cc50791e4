//! Session management configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Session lifetimes, cookie naming, and the optional expiry sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Lifetime of a normal session, in minutes.
    #[serde(default = "default_short_ttl")]
    pub short_ttl_minutes: u64,
    /// Lifetime of a "remember me" session, in days.
    #[serde(default = "default_long_ttl")]
    pub long_ttl_days: u64,
    /// Lifetime of the post-login redirect cookie, in seconds.
    #[serde(default = "default_return_to_ttl")]
    pub return_to_ttl_seconds: u64,
    /// Whether a background task purges expired sessions.
    #[serde(default)]
    pub cleanup_enabled: bool,
    /// Interval for expired session cleanup in minutes.
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_minutes: u64,
}

impl SessionConfig {
    /// Session lifetime for the given login choice.
    pub fn ttl(&self, remember_me: bool) -> Duration {
        if remember_me {
            Duration::days(self.long_ttl_days as i64)
        } else {
            Duration::minutes(self.short_ttl_minutes as i64)
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            short_ttl_minutes: default_short_ttl(),
            long_ttl_days: default_long_ttl(),
            return_to_ttl_seconds: default_return_to_ttl(),
            cleanup_enabled: false,
            cleanup_interval_minutes: default_cleanup_interval(),
        }
    }
}

fn default_cookie_name() -> String {
    "session_token".to_string()
}

fn default_short_ttl() -> u64 {
    60
}

fn default_long_ttl() -> u64 {
    30
}

fn default_return_to_ttl() -> u64 {
    300
}

fn default_cleanup_interval() -> u64 {
    15
}
