//! # untie-core
//!
//! Core crate for Un-tie.me code. Contains configuration schemas, typed
//! identifiers, the store traits implemented by `untie-store`, the clock
//! abstraction, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Un-tie.me crates.

pub mod clock;
pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use clock::{Clock, SystemClock};
pub use error::{AppError, ErrorKind};
pub use result::AppResult;
