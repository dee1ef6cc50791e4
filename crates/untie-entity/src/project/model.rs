//! Project entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use untie_core::traits::{Entity, Owned};
use untie_core::types::{ProjectId, UserId};

use super::feature::Feature;

/// A workspace project owned by a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier.
    pub id: ProjectId,
    /// The owning user. Set once at creation.
    pub owner_id: UserId,
    /// Project name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Technologies the project uses.
    #[serde(default)]
    pub tech_stack: TechStack,
    /// Planned and delivered features.
    #[serde(default)]
    pub features: Vec<Feature>,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated. Never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Build a new project for `owner_id` with a fresh identifier.
    pub fn new(owner_id: UserId, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: ProjectId::new(),
            owner_id,
            name: name.into(),
            description: String::new(),
            tech_stack: TechStack::default(),
            features: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `user_id` owns this project.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

impl Entity for Project {
    type Id = ProjectId;
    const KIND: &'static str = "project";

    fn id(&self) -> ProjectId {
        self.id
    }
}

impl Owned for Project {
    fn owner_id(&self) -> UserId {
        self.owner_id
    }

    fn set_owner_id(&mut self, owner: UserId) {
        self.owner_id = owner;
    }
}

/// Technology choices grouped by layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStack {
    /// Frontend frameworks and libraries.
    #[serde(default)]
    pub frontend: Vec<String>,
    /// Backend languages and frameworks.
    #[serde(default)]
    pub backend: Vec<String>,
    /// Databases.
    #[serde(default)]
    pub database: Vec<String>,
    /// Hosting platforms.
    #[serde(default)]
    pub hosting: Vec<String>,
    /// CI/CD tooling.
    #[serde(default)]
    pub ci: Vec<String>,
    /// Anything else.
    #[serde(default)]
    pub other: Vec<String>,
}
