//! Development account seeding.

use serde::{Deserialize, Serialize};

/// A user created at startup so a fresh development server can be logged into.
///
/// The account is an ordinary user with a hashed password. It goes through
/// the same authentication path as every other account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Whether to create the account on startup.
    #[serde(default)]
    pub enabled: bool,
    /// Login email.
    #[serde(default = "default_email")]
    pub email: String,
    /// Display name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Plaintext password, hashed before it is stored.
    #[serde(default, skip_serializing)]
    pub password: String,
    /// Role name (`admin` or `user`).
    #[serde(default = "default_role")]
    pub role: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            email: default_email(),
            name: default_name(),
            password: String::new(),
            role: default_role(),
        }
    }
}

fn default_email() -> String {
    "test@untie.me".to_string()
}

fn default_name() -> String {
    "Test User".to_string()
}

fn default_role() -> String {
    "admin".to_string()
}
