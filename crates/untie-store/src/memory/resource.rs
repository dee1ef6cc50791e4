//! Generic in-memory store for owner-scoped resources.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::debug;

use untie_core::error::AppError;
use untie_core::result::AppResult;
use untie_core::traits::{Owned, OwnedRepository, Repository};
use untie_core::types::UserId;

/// Thread-safe store for any [`Owned`] entity.
///
/// Entries are kept in id order so [`OwnedRepository::list_by_owner`] is
/// deterministic. `update` keeps the stored owner even when the incoming
/// value names a different one.
pub struct MemoryResourceStore<E: Owned> {
    items: RwLock<BTreeMap<E::Id, E>>,
}

impl<E: Owned> std::fmt::Debug for MemoryResourceStore<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryResourceStore")
            .field("kind", &E::KIND)
            .field("len", &self.items.read().len())
            .finish()
    }
}

impl<E: Owned> MemoryResourceStore<E> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<E: Owned> Default for MemoryResourceStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Owned> Repository<E> for MemoryResourceStore<E> {
    fn create(&self, entity: E) -> AppResult<E> {
        let mut items = self.items.write();
        let id = entity.id();
        if items.contains_key(&id) {
            return Err(AppError::already_exists(format!(
                "{} {id} already exists",
                E::KIND
            )));
        }
        items.insert(id, entity.clone());
        debug!(kind = E::KIND, id = %id, owner_id = %entity.owner_id(), "Resource stored");
        Ok(entity)
    }

    fn find_by_id(&self, id: &E::Id) -> AppResult<Option<E>> {
        Ok(self.items.read().get(id).cloned())
    }

    fn update(&self, mut entity: E) -> AppResult<E> {
        let mut items = self.items.write();
        let id = entity.id();
        let stored = items
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("{} {id} not found", E::KIND)))?;
        entity.set_owner_id(stored.owner_id());
        *stored = entity.clone();
        Ok(entity)
    }

    fn delete(&self, id: &E::Id) -> AppResult<()> {
        self.items
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("{} {id} not found", E::KIND)))
    }

    fn count(&self) -> AppResult<usize> {
        Ok(self.items.read().len())
    }
}

impl<E: Owned> OwnedRepository<E> for MemoryResourceStore<E> {
    fn list_by_owner(&self, owner: &UserId) -> AppResult<Vec<E>> {
        Ok(self
            .items
            .read()
            .values()
            .filter(|e| e.owner_id() == *owner)
            .cloned()
            .collect())
    }
}
