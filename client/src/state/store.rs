//! Entity store behind a narrow repository interface.
//!
//! DESIGN
//! ======
//! The admin controller only needs create, list and delete by id. Keeping
//! that surface in `Repository` means a durable backend can replace
//! `MemoryStore` without touching controller logic.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// A record addressable by an opaque string id.
pub trait Entity {
    fn id(&self) -> &str;
}

/// Store-level failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("duplicate id: {0}")]
    DuplicateId(String),
}

/// Create/list/delete access to one entity list.
pub trait Repository<T: Entity> {
    /// Append `entity` after all existing entries.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if an entry with the same id is already stored.
    fn insert(&mut self, entity: T) -> Result<(), StoreError>;

    /// All entries in insertion order.
    fn list(&self) -> &[T];

    /// Remove and return the entry with `id`, if present.
    fn remove(&mut self, id: &str) -> Option<T>;

    fn get(&self, id: &str) -> Option<&T> {
        self.list().iter().find(|e| e.id() == id)
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// Insertion-ordered, page-scoped store. Contents vanish with the page.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryStore<T> {
    items: Vec<T>,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> MemoryStore<T> {
    /// Build a store from initial entries, skipping any repeated id.
    pub fn with_entries(entries: impl IntoIterator<Item = T>) -> Self {
        let mut store = Self::default();
        for entry in entries {
            let _ = store.insert(entry);
        }
        store
    }
}

impl<T: Entity> Repository<T> for MemoryStore<T> {
    fn insert(&mut self, entity: T) -> Result<(), StoreError> {
        if self.items.iter().any(|e| e.id() == entity.id()) {
            return Err(StoreError::DuplicateId(entity.id().to_owned()));
        }
        self.items.push(entity);
        Ok(())
    }

    fn list(&self) -> &[T] {
        &self.items
    }

    fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|e| e.id() == id)?;
        Some(self.items.remove(index))
    }
}
