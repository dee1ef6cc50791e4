//! Credential policy configuration.

use serde::{Deserialize, Serialize};

/// Password policy applied at registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Minimum password length in characters.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Maximum password length in characters.
    #[serde(default = "default_password_max")]
    pub password_max_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_password_min(),
            password_max_length: default_password_max(),
        }
    }
}

fn default_password_min() -> usize {
    8
}

fn default_password_max() -> usize {
    128
}
