//! Feature flags for the optional project workspace pages.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Project sub-pages that can be toggled per deployment.
pub const KNOWN_FEATURES: &[&str] = &[
    "architecture_canvas",
    "story_flow",
    "task_hub",
    "review_queue",
    "design_assistant",
];

/// Feature name to enabled flag.
///
/// Flags that are not listed fall back to the environment default: on in
/// `development`, off everywhere else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureFlags(pub HashMap<String, bool>);

impl FeatureFlags {
    /// Whether `feature` is switched on for the given environment.
    ///
    /// Names outside [`KNOWN_FEATURES`] are never enabled.
    pub fn is_enabled(&self, feature: &str, environment: &str) -> bool {
        if !KNOWN_FEATURES.contains(&feature) {
            return false;
        }
        self.0
            .get(feature)
            .copied()
            .unwrap_or_else(|| environment.eq_ignore_ascii_case("development"))
    }

    /// All known features enabled for the environment, in display order.
    pub fn enabled(&self, environment: &str) -> Vec<&'static str> {
        KNOWN_FEATURES
            .iter()
            .copied()
            .filter(|f| self.is_enabled(f, environment))
            .collect()
    }
}
