//! Dual-indexed in-memory user store.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use untie_core::error::AppError;
use untie_core::result::AppResult;
use untie_core::traits::Repository;
use untie_core::types::UserId;
use untie_entity::user::{User, normalize_email};

use crate::traits::UserRepository;

/// How [`UserIndex::put`] treats an existing primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PutMode {
    /// The id must be new.
    Insert,
    /// The id must already exist.
    Replace,
}

/// Primary and email indexes. Only mutated through `put` and `remove`, which
/// check every precondition before touching either map.
#[derive(Debug, Default)]
struct UserIndex {
    by_id: HashMap<UserId, User>,
    by_email: HashMap<String, UserId>,
}

impl UserIndex {
    fn put(&mut self, mut user: User, mode: PutMode) -> AppResult<User> {
        let email_key = normalize_email(&user.email);
        user.email = email_key.clone();

        let previous_email = match (mode, self.by_id.get(&user.id)) {
            (PutMode::Insert, Some(_)) => {
                return Err(AppError::duplicate_identifier(format!(
                    "User {} already exists",
                    user.id
                )));
            }
            (PutMode::Replace, None) => {
                return Err(AppError::not_found(format!("User {} not found", user.id)));
            }
            (PutMode::Insert, None) => None,
            (PutMode::Replace, Some(existing)) => Some(existing.email.clone()),
        };

        if let Some(owner) = self.by_email.get(&email_key) {
            if *owner != user.id {
                return Err(AppError::duplicate_email(format!(
                    "Email {email_key} is already registered"
                )));
            }
        }

        if let Some(old) = previous_email {
            if old != email_key {
                self.by_email.remove(&old);
            }
        }
        self.by_email.insert(email_key, user.id);
        self.by_id.insert(user.id, user.clone());
        Ok(user)
    }

    fn remove(&mut self, id: &UserId) -> AppResult<User> {
        let user = self
            .by_id
            .remove(id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        self.by_email.remove(&user.email);
        Ok(user)
    }
}

/// Thread-safe user store keyed by id and by normalized email.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    index: RwLock<UserIndex>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository<User> for MemoryUserStore {
    fn create(&self, user: User) -> AppResult<User> {
        let created = self.index.write().put(user, PutMode::Insert)?;
        debug!(user_id = %created.id, email = %created.email, "User stored");
        Ok(created)
    }

    fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        Ok(self.index.read().by_id.get(id).cloned())
    }

    fn update(&self, user: User) -> AppResult<User> {
        self.index.write().put(user, PutMode::Replace)
    }

    fn delete(&self, id: &UserId) -> AppResult<()> {
        let removed = self.index.write().remove(id)?;
        debug!(user_id = %removed.id, "User removed");
        Ok(())
    }

    fn count(&self) -> AppResult<usize> {
        Ok(self.index.read().by_id.len())
    }
}

impl UserRepository for MemoryUserStore {
    fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let key = normalize_email(email);
        let index = self.index.read();
        Ok(index
            .by_email
            .get(&key)
            .and_then(|id| index.by_id.get(id))
            .cloned())
    }

    fn modify(&self, id: &UserId, change: &mut dyn FnMut(&mut User)) -> AppResult<User> {
        let mut index = self.index.write();
        let mut user = index
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        change(&mut user);
        user.id = *id;
        index.put(user, PutMode::Replace)
    }
}
