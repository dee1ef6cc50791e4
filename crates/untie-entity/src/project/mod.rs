//! Project domain entities.

pub mod feature;
pub mod model;

pub use feature::{Feature, FeatureImpl, FeatureStatus};
pub use model::{Project, TechStack};
