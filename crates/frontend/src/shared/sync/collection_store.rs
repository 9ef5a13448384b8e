//! Local Collection Store
//!
//! In-memory, ordered cache of one entity kind. Every mutation returns a new
//! collection and leaves the receiver untouched, so a failed step never leaves
//! a half-applied list behind.

use contracts::domain::common::{Entity, EntityId};
use thiserror::Error;

/// Invariant violations of the local collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{kind} with id {id} is already in the collection")]
    DuplicateId { kind: &'static str, id: EntityId },

    #[error("{kind} with id {id} is not in the collection")]
    NotFound { kind: &'static str, id: EntityId },
}

/// Ordered list of entities keyed by `id`, in server-return order.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalCollection<T> {
    items: Vec<T>,
}

impl<T> Default for LocalCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> LocalCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Server truth replaces the whole list verbatim; no dedup.
    pub fn replace_all(&self, entities: Vec<T>) -> Self {
        Self { items: entities }
    }

    pub fn append(&self, entity: T) -> Result<Self, StoreError> {
        if self.contains(entity.id()) {
            return Err(StoreError::DuplicateId {
                kind: T::element_name(),
                id: entity.id(),
            });
        }
        let mut items = self.items.clone();
        items.push(entity);
        Ok(Self { items })
    }

    /// Idempotent: removing an absent id returns an identical collection.
    pub fn remove_by_id(&self, id: EntityId) -> Self {
        Self {
            items: self.items.iter().filter(|e| e.id() != id).cloned().collect(),
        }
    }

    pub fn replace_by_id(&self, entity: T) -> Result<Self, StoreError> {
        let id = entity.id();
        let position = self
            .items
            .iter()
            .position(|e| e.id() == id)
            .ok_or(StoreError::NotFound {
                kind: T::element_name(),
                id,
            })?;
        let mut items = self.items.clone();
        items[position] = entity;
        Ok(Self { items })
    }
}

impl<T> From<Vec<T>> for LocalCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}
