//! Project workspace operations.

pub mod service;

pub use service::{CreateProjectRequest, ProjectPatch, ProjectService};
