//! Store traits implemented by the in-memory backend.
//!
//! The operations are synchronous: every implementation holds its own lock
//! for the duration of a call and never suspends, so callers on an async
//! runtime can invoke them directly. Every value crossing the trait boundary
//! is an owned copy. Mutating a returned entity never affects the stored one.
//! A durable backend can be dropped in by implementing the same traits.

use std::fmt::Display;
use std::hash::Hash;

use crate::error::AppError;
use crate::result::AppResult;
use crate::types::UserId;

/// An entity that can live in a [`Repository`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Primary key type.
    type Id: Copy + Ord + Hash + Display + Send + Sync + 'static;

    /// Short lowercase name used in error messages (e.g. `"project"`).
    const KIND: &'static str;

    /// The entity's primary key.
    fn id(&self) -> Self::Id;
}

/// An entity scoped to exactly one owning user.
pub trait Owned: Entity {
    /// The owning user.
    fn owner_id(&self) -> UserId;

    /// Overwrite the owner. Stores use this to pin the owner on update.
    fn set_owner_id(&mut self, owner: UserId);
}

/// Generic CRUD store.
pub trait Repository<E: Entity>: Send + Sync + 'static {
    /// Insert a new entity. Fails with `AlreadyExists` if the id is taken.
    fn create(&self, entity: E) -> AppResult<E>;

    /// Find an entity by its primary key.
    fn find_by_id(&self, id: &E::Id) -> AppResult<Option<E>>;

    /// Replace a stored entity. Fails with `NotFound` if the id is absent.
    fn update(&self, entity: E) -> AppResult<E>;

    /// Remove an entity. Fails with `NotFound` if the id is absent.
    fn delete(&self, id: &E::Id) -> AppResult<()>;

    /// Count stored entities.
    fn count(&self) -> AppResult<usize>;

    /// Like [`Repository::find_by_id`] but absent entities are an error.
    fn get(&self, id: &E::Id) -> AppResult<E> {
        self.find_by_id(id)?
            .ok_or_else(|| AppError::not_found(format!("{} {id} not found", E::KIND)))
    }
}

/// A store of [`Owned`] entities that can be listed per owner.
pub trait OwnedRepository<E: Owned>: Repository<E> {
    /// Every entity owned by `owner`, ordered by id ascending.
    fn list_by_owner(&self, owner: &UserId) -> AppResult<Vec<E>>;
}
