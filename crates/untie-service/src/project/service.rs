//! Project CRUD with ownership enforcement.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use untie_auth::OwnershipChecker;
use untie_core::clock::Clock;
use untie_core::error::AppError;
use untie_core::result::AppResult;
use untie_core::traits::{OwnedRepository, Repository};
use untie_core::types::ProjectId;
use untie_entity::project::{Feature, Project, TechStack};

use crate::context::RequestContext;

const MAX_NAME_LEN: usize = 200;

/// Data for creating a project. The owner is always the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    /// Project name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: String,
    /// Initial tech stack.
    #[serde(default)]
    pub tech_stack: TechStack,
    /// Initial features.
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// Partial update of a project. Absent fields are left unchanged.
///
/// Has no owner field: ownership cannot be transferred.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPatch {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Replacement tech stack.
    pub tech_stack: Option<TechStack>,
    /// Replacement feature list.
    pub features: Option<Vec<Feature>>,
}

/// Owner-scoped project operations.
#[derive(Clone)]
pub struct ProjectService {
    projects: Arc<dyn OwnedRepository<Project>>,
    ownership: OwnershipChecker,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for ProjectService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectService").finish()
    }
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(projects: Arc<dyn OwnedRepository<Project>>, clock: Arc<dyn Clock>) -> Self {
        Self {
            projects,
            ownership: OwnershipChecker::new(),
            clock,
        }
    }

    /// Lists the caller's projects in id order.
    pub fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Project>> {
        self.projects.list_by_owner(&ctx.user_id)
    }

    /// The caller's `limit` most recently updated projects.
    pub fn recent(&self, ctx: &RequestContext, limit: usize) -> AppResult<Vec<Project>> {
        let mut projects = self.list(ctx)?;
        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        projects.truncate(limit);
        Ok(projects)
    }

    /// Creates a project owned by the caller.
    pub fn create(&self, ctx: &RequestContext, req: CreateProjectRequest) -> AppResult<Project> {
        let name = validate_name(&req.name)?;
        validate_features(&req.features)?;

        let mut project = Project::new(ctx.user_id, name, self.clock.now());
        project.description = req.description;
        project.tech_stack = req.tech_stack;
        project.features = req.features;

        let project = self.projects.create(project)?;
        info!(user_id = %ctx.user_id, project_id = %project.id, "Project created");
        Ok(project)
    }

    /// Fetches one of the caller's projects.
    pub fn get(&self, ctx: &RequestContext, id: ProjectId) -> AppResult<Project> {
        self.ownership
            .load_owned(self.projects.as_ref(), &id, ctx.user_id)
    }

    /// Applies a patch to one of the caller's projects.
    pub fn update(
        &self,
        ctx: &RequestContext,
        id: ProjectId,
        patch: ProjectPatch,
    ) -> AppResult<Project> {
        let mut project = self.get(ctx, id)?;

        if let Some(name) = patch.name {
            project.name = validate_name(&name)?;
        }
        if let Some(description) = patch.description {
            project.description = description;
        }
        if let Some(tech_stack) = patch.tech_stack {
            project.tech_stack = tech_stack;
        }
        if let Some(features) = patch.features {
            validate_features(&features)?;
            project.features = features;
        }
        project.updated_at = self.clock.now().max(project.created_at);

        let project = self.projects.update(project)?;
        info!(user_id = %ctx.user_id, project_id = %project.id, "Project updated");
        Ok(project)
    }

    /// Deletes one of the caller's projects.
    pub fn delete(&self, ctx: &RequestContext, id: ProjectId) -> AppResult<()> {
        self.get(ctx, id)?;
        self.projects.delete(&id)?;
        info!(user_id = %ctx.user_id, project_id = %id, "Project deleted");
        Ok(())
    }
}

fn validate_name(name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Project name is required"));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "Project name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

fn validate_features(features: &[Feature]) -> AppResult<()> {
    if features.iter().any(|f| f.name.trim().is_empty()) {
        return Err(AppError::validation("Feature name is required"));
    }
    Ok(())
}
