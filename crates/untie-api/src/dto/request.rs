//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use untie_core::error::AppError;

/// JSON login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Issue a long-lived session.
    #[serde(default)]
    pub remember_me: bool,
}

/// Login form fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginForm {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Checkbox value; present when ticked.
    #[serde(default)]
    pub remember_me: Option<String>,
}

impl LoginForm {
    /// Whether the "remember me" box was ticked.
    pub fn remember(&self) -> bool {
        matches!(self.remember_me.as_deref(), Some("on" | "true" | "1"))
    }
}

/// Registration form fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterForm {
    /// Email address.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Project creation form fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectForm {
    /// Project name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: String,
}

/// Query string of the login and register pages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    /// Error message to show above the form.
    pub error: Option<String>,
}

/// Runs `validator` checks and maps failures to a validation error.
pub fn validate<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(first_message(&e)))
}

fn first_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid input".to_string())
}
