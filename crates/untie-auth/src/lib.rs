//! # untie-auth
//!
//! Authentication and authorization for Un-tie.me code.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and policy enforcement
//! - `session`: token minting, the session registry and login/logout flows,
//!   plus the optional expiry sweep
//! - `ownership`: single-owner authorization for resources

pub mod ownership;
pub mod password;
pub mod session;

pub use ownership::OwnershipChecker;
pub use password::{PasswordHasher, PasswordValidator};
pub use session::{AuthService, LoginResult, SessionCleanup, SessionRegistry, VerifiedSession};
