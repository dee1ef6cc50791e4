//! Features tracked inside a project.

use std::fmt;

use serde::{Deserialize, Serialize};

use untie_core::types::FeatureId;

/// A product feature with its implementation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Feature identifier, unique within the project.
    #[serde(default)]
    pub id: FeatureId,
    /// Feature name.
    pub name: String,
    /// What the feature does.
    #[serde(default)]
    pub description: String,
    /// One entry per version that touches the feature.
    #[serde(default)]
    pub versions: Vec<FeatureImpl>,
}

/// The state of a feature in a given version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureImpl {
    /// Version label, e.g. `"1.2"`.
    pub version: String,
    /// Delivery status.
    #[serde(default)]
    pub status: FeatureStatus,
    /// Notes for this version.
    #[serde(default)]
    pub description: String,
}

/// Delivery status of a feature version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureStatus {
    /// Not started.
    #[default]
    Planned,
    /// Being built.
    InProgress,
    /// Shipped.
    Completed,
    /// Pushed to a later version.
    Deferred,
}

impl fmt::Display for FeatureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Deferred => "deferred",
        };
        write!(f, "{s}")
    }
}
