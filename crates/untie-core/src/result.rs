//! Convenience result type alias for Un-tie.me.

use crate::error::AppError;

/// A specialized `Result` type for Un-tie.me operations.
pub type AppResult<T> = Result<T, AppError>;
