//! Custom Axum extractors.

pub mod auth;
pub mod path;

pub use auth::{AuthUser, MaybeUser};
pub use path::parse_project_id;
