//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! `config/default.toml`, an environment overlay, and `UNTIE__*` environment
//! variables. Every field carries a serde default, so an empty source yields
//! a runnable development configuration.

pub mod app;
pub mod auth;
pub mod features;
pub mod logging;
pub mod seed;
pub mod session;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::features::FeatureFlags;
pub use self::logging::LoggingConfig;
pub use self::seed::SeedConfig;
pub use self::session::SessionConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Credential policy.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Session lifetimes and cookie naming.
    #[serde(default)]
    pub session: SessionConfig,
    /// Optional workspace pages, keyed by feature name.
    #[serde(default)]
    pub features: FeatureFlags,
    /// Development account created at startup.
    #[serde(default)]
    pub seed: SeedConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default.toml` with `config/{env}.toml` and environment
    /// variables prefixed with `UNTIE__` (e.g. `UNTIE__SERVER__PORT=9000`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .set_default("server.environment", env)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("UNTIE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject combinations that would start an unsafe or unusable server.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.session.short_ttl_minutes == 0 || self.session.long_ttl_days == 0 {
            return Err(AppError::configuration("Session TTLs must be non-zero"));
        }
        if self.session.cookie_name.trim().is_empty() {
            return Err(AppError::configuration("Session cookie name cannot be empty"));
        }
        if self.auth.password_min_length > self.auth.password_max_length {
            return Err(AppError::configuration(
                "password_min_length exceeds password_max_length",
            ));
        }
        if self.seed.enabled && self.server.is_production() {
            return Err(AppError::configuration(
                "Seeded development accounts are not allowed in production",
            ));
        }
        if self.seed.enabled && self.seed.password.is_empty() {
            return Err(AppError::configuration(
                "seed.password must be set when seed.enabled is true",
            ));
        }
        Ok(())
    }
}
