//! Session lifecycle: token minting, the registry, auth flows, and expiry sweeps.

pub mod cleanup;
pub mod manager;
pub mod registry;
pub mod token;

pub use cleanup::SessionCleanup;
pub use manager::{AuthService, LoginResult};
pub use registry::{SessionRegistry, VerifiedSession};
