//! Single-owner authorization.
//!
//! Every owned resource belongs to exactly one user and only that user may
//! read, change, or delete it. Roles do not widen access.

use tracing::warn;

use untie_core::error::AppError;
use untie_core::result::AppResult;
use untie_core::traits::{Owned, Repository};
use untie_core::types::UserId;

/// Checks that an actor owns the resource it is touching.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnershipChecker;

impl OwnershipChecker {
    /// Creates a new ownership checker.
    pub fn new() -> Self {
        Self
    }

    /// Fails with `Forbidden` unless `actor` owns `resource`.
    pub fn ensure_owner<E: Owned>(&self, actor: UserId, resource: &E) -> AppResult<()> {
        if resource.owner_id() == actor {
            return Ok(());
        }
        warn!(
            kind = E::KIND,
            resource_id = %resource.id(),
            actor = %actor,
            "Access to resource owned by another user denied"
        );
        Err(AppError::forbidden(format!(
            "You do not have access to this {}",
            E::KIND
        )))
    }

    /// Loads a resource and checks ownership before handing it back.
    ///
    /// Missing resources fail with `NotFound`; resources owned by someone
    /// else fail with `Forbidden`.
    pub fn load_owned<E, R>(&self, repo: &R, id: &E::Id, actor: UserId) -> AppResult<E>
    where
        E: Owned,
        R: Repository<E> + ?Sized,
    {
        let resource = repo.get(id)?;
        self.ensure_owner(actor, &resource)?;
        Ok(resource)
    }
}
