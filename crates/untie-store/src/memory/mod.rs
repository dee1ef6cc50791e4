//! In-memory store implementations.

pub mod resource;
pub mod user;

pub use resource::MemoryResourceStore;
pub use user::MemoryUserStore;
