//! Unified application error types for Un-tie.me.
//!
//! Stores, the session registry, and services all report failures as an
//! [`AppError`] tagged with an [`ErrorKind`]. The HTTP layer maps each kind to
//! a status code and a stable `error` string, so the kinds below are part of
//! the public API contract.

use std::fmt;

use thiserror::Error;

/// Error categorization shared by every crate in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested entity does not exist.
    NotFound,
    /// A resource with the same identifier already exists.
    AlreadyExists,
    /// A user with the same identifier already exists.
    DuplicateIdentifier,
    /// The email address is already indexed for another user.
    DuplicateEmail,
    /// Unknown email or wrong password. The two cases are never distinguished.
    InvalidCredentials,
    /// The presented session token has passed its expiry.
    SessionExpired,
    /// The presented session token is unknown.
    SessionNotFound,
    /// The acting identity does not own the target resource.
    Forbidden,
    /// Input validation failed.
    Validation,
    /// A configuration error occurred.
    Configuration,
    /// An internal server error occurred.
    Internal,
}

impl ErrorKind {
    /// Stable, machine-readable code exposed in API error bodies.
    ///
    /// Both session failures collapse into `not_authenticated` so callers
    /// cannot probe which tokens once existed.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::AlreadyExists => "already_exists",
            Self::DuplicateIdentifier => "duplicate_identifier",
            Self::DuplicateEmail => "duplicate_email",
            Self::InvalidCredentials => "invalid_credentials",
            Self::SessionExpired | Self::SessionNotFound => "not_authenticated",
            Self::Forbidden => "forbidden",
            Self::Validation => "invalid_input",
            Self::Configuration | Self::Internal => "internal_error",
        }
    }

    /// Whether the kind means "no usable session".
    pub fn is_session_failure(&self) -> bool {
        matches!(self, Self::SessionExpired | Self::SessionNotFound)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::AlreadyExists => write!(f, "ALREADY_EXISTS"),
            Self::DuplicateIdentifier => write!(f, "DUPLICATE_IDENTIFIER"),
            Self::DuplicateEmail => write!(f, "DUPLICATE_EMAIL"),
            Self::InvalidCredentials => write!(f, "INVALID_CREDENTIALS"),
            Self::SessionExpired => write!(f, "SESSION_EXPIRED"),
            Self::SessionNotFound => write!(f, "SESSION_NOT_FOUND"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout Un-tie.me.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an already-exists error.
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyExists, message)
    }

    /// Create a duplicate-identifier error.
    pub fn duplicate_identifier(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateIdentifier, message)
    }

    /// Create a duplicate-email error.
    pub fn duplicate_email(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateEmail, message)
    }

    /// The single credentials failure returned for every bad login.
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorKind::InvalidCredentials, "Invalid email or password")
    }

    /// Create a session-expired error.
    pub fn session_expired() -> Self {
        Self::new(ErrorKind::SessionExpired, "Session has expired")
    }

    /// Create a session-not-found error.
    pub fn session_not_found() -> Self {
        Self::new(ErrorKind::SessionNotFound, "Session not found")
    }

    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Validation,
            format!("Malformed JSON: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
