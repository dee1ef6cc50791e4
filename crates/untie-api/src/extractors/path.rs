//! Typed path parameter helpers.

use untie_core::error::AppError;
use untie_core::types::ProjectId;

/// Parses a project id from a path segment.
pub fn parse_project_id(s: &str) -> Result<ProjectId, AppError> {
    s.parse()
        .map_err(|_| AppError::validation(format!("Invalid project id: {s}")))
}
