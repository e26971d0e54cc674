use std::sync::{Arc, RwLock};
use thiserror::Error;

use crate::models::Profile;

/// Errors that can occur when interacting with a profile store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Point-in-time, immutable view of the stored profiles
pub type Snapshot = Arc<Vec<Profile>>;

/// Read/append contract for profile storage
///
/// Readers work on a [`Snapshot`]; an append that happens while a snapshot
/// is held must not change what that snapshot sees. The store does not
/// deduplicate ids: callers assign unique ids before appending.
pub trait ProfileStore: Send + Sync {
    /// All profiles in insertion order
    fn list(&self) -> Result<Snapshot, StoreError>;

    /// Look up a profile by id
    fn get(&self, id: &str) -> Result<Option<Profile>, StoreError> {
        Ok(self.list()?.iter().find(|p| p.id == id).cloned())
    }

    /// Add a profile at the end
    fn append(&self, profile: Profile) -> Result<(), StoreError>;

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.list()?.len())
    }
}

/// Process-local store
///
/// Holds a copy-on-write vector: readers clone the `Arc`, and an append
/// only copies the vector when a reader still holds the old one.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<Snapshot>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: RwLock::new(Arc::new(profiles)),
        }
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn list(&self) -> Result<Snapshot, StoreError> {
        let guard = self
            .profiles
            .read()
            .map_err(|_| StoreError::Unavailable("profile store lock poisoned".to_string()))?;
        Ok(Arc::clone(&*guard))
    }

    fn append(&self, profile: Profile) -> Result<(), StoreError> {
        let mut guard = self
            .profiles
            .write()
            .map_err(|_| StoreError::Unavailable("profile store lock poisoned".to_string()))?;

        tracing::trace!("Appending profile {}", profile.id);
        Arc::make_mut(&mut *guard).push(profile);
        Ok(())
    }
}
