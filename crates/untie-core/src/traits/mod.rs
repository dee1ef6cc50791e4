//! Core traits defined in `untie-core` and implemented by other crates.

pub mod repository;

pub use repository::{Entity, Owned, OwnedRepository, Repository};
