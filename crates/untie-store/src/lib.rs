//! # untie-store
//!
//! Repository traits for users and owned resources, plus the in-memory
//! implementations the server runs on.
//!
//! Each store guards its maps with a single `parking_lot::RwLock`. Reads
//! clone out of the map and writes clone in, so no caller ever holds a
//! reference into store-internal state.

pub mod memory;
pub mod traits;

pub use memory::{MemoryResourceStore, MemoryUserStore};
pub use traits::UserRepository;
