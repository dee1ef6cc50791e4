//! # untie-service
//!
//! Business logic for Un-tie.me. Services receive the acting user as a
//! [`RequestContext`] and enforce ownership before touching any resource.
//!
//! Services follow constructor injection: every dependency is handed in
//! as an `Arc` at construction time.

pub mod context;
pub mod project;
pub mod user;

pub use context::RequestContext;
pub use project::{CreateProjectRequest, ProjectPatch, ProjectService};
pub use user::{UpdateProfileRequest, UserService};
