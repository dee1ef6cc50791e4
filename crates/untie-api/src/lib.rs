//! # untie-api
//!
//! HTTP layer for Un-tie.me built on Axum.
//!
//! Provides the JSON API under `/api/v1`, the server-rendered workspace
//! pages, the session gate (cookie resolution plus page and API guards),
//! extractors, DTOs, and error mapping.

pub mod app;
pub mod cookies;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod views;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
