//! Core type definitions used across the Un-tie.me workspace.

pub mod id;
pub mod response;

pub use id::*;
pub use response::ApiErrorResponse;
