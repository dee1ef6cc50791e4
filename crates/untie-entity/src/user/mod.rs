//! User domain entities.

pub mod model;
pub mod role;

pub use model::{User, normalize_email};
pub use role::UserRole;
