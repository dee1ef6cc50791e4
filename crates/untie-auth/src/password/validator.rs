//! Registration input policy.

use validator::ValidateEmail;

use untie_core::config::AuthConfig;
use untie_core::error::AppError;

/// Validates registration fields against configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
    max_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
            max_length: config.password_max_length,
        }
    }

    /// Validates a new password.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        let len = password.chars().count();
        if len < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        if len > self.max_length {
            return Err(AppError::validation(format!(
                "Password must be at most {} characters long",
                self.max_length
            )));
        }
        if password.trim().is_empty() {
            return Err(AppError::validation("Password cannot be blank"));
        }
        Ok(())
    }

    /// Validates an email address shape.
    pub fn validate_email(&self, email: &str) -> Result<(), AppError> {
        if !email.trim().to_string().validate_email() {
            return Err(AppError::validation("Invalid email format"));
        }
        Ok(())
    }

    /// Validates a display name.
    pub fn validate_name(&self, name: &str) -> Result<(), AppError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        if trimmed.chars().count() > 100 {
            return Err(AppError::validation("Name must be at most 100 characters"));
        }
        Ok(())
    }
}
