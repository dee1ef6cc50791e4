//! HTTP request handlers.

pub mod auth;
pub mod health;
pub mod pages;
pub mod project;
pub mod status;
pub mod user;
