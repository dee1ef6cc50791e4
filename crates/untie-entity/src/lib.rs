//! # untie-entity
//!
//! Domain entity models for Un-tie.me code. Every struct in this crate is a
//! plain value: it derives `Clone`, so a store can hand out independent
//! copies, and `Serialize`/`Deserialize` for the JSON API.

pub mod project;
pub mod session;
pub mod user;
