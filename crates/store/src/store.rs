//! EntityStore: collection-keyed CRUD over entities
//!
//! ## Design
//!
//! EntityStore is a stateless facade over an injected [`StorageBackend`].
//! Every operation reads the whole collection, mutates it in memory, and
//! writes the whole collection back. O(n) per operation, which is fine at
//! the record counts this targets.
//!
//! ## Failure semantics
//!
//! - A corrupt stored payload **fails soft**: [`EntityStore::list`] logs a
//!   warning and returns an empty collection, so a bad payload never bricks
//!   the caller. [`EntityStore::list_strict`] is the typed alternative for
//!   callers that want to see the corruption.
//! - Write failures are typed errors and propagate; nothing panics.
//!
//! ## Ordering
//!
//! Collections keep insertion order. `upsert` of a NEW id prepends
//! (most-recent-first); `upsert` of an existing id replaces in place.

use crate::backend::StorageBackend;
use gridkit_core::{Entity, Error, Result};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};
use uuid::Uuid;

/// Synchronous CRUD over named collections of entities
///
/// Cloning is cheap; clones share the backend.
#[derive(Clone)]
pub struct EntityStore {
    backend: Arc<dyn StorageBackend>,
}

impl EntityStore {
    /// Create a store over the given backend
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        EntityStore { backend }
    }

    /// The underlying backend
    pub fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    /// Full collection under `key`, failing soft to empty
    ///
    /// Missing key and undecodable payload both yield an empty collection;
    /// the latter logs a warning. Backend I/O failures still surface as
    /// errors.
    pub fn list(&self, key: &str) -> Result<Vec<Entity>> {
        match self.list_strict(key) {
            Ok(entities) => Ok(entities),
            Err(Error::Corruption { collection, detail }) => {
                warn!(
                    collection = %collection,
                    %detail,
                    "corrupt collection payload, recovering as empty"
                );
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Full collection under `key`, surfacing corruption as a typed error
    pub fn list_strict(&self, key: &str) -> Result<Vec<Entity>> {
        let Some(payload) = self.backend.read(key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&payload).map_err(|e| Error::Corruption {
            collection: key.to_string(),
            detail: e.to_string(),
        })
    }

    /// Find one entity by id via linear scan
    pub fn get(&self, key: &str, id: &str) -> Result<Option<Entity>> {
        Ok(self.list(key)?.into_iter().find(|e| e.id == id))
    }

    /// Insert or replace an entity
    ///
    /// Same-id replace keeps the entity's position; a new id is prepended so
    /// the newest record lists first. Returns the entity unchanged.
    pub fn upsert(&self, key: &str, entity: Entity) -> Result<Entity> {
        let mut entities = self.list(key)?;
        match entities.iter().position(|e| e.id == entity.id) {
            Some(pos) => entities[pos] = entity.clone(),
            None => entities.insert(0, entity.clone()),
        }
        self.persist(key, &entities)?;
        Ok(entity)
    }

    /// Remove the entity with `id`, if present
    ///
    /// Removing an absent id persists the collection unchanged. Removing the
    /// last entity keeps the key with an empty array.
    pub fn remove(&self, key: &str, id: &str) -> Result<()> {
        let mut entities = self.list(key)?;
        entities.retain(|e| e.id != id);
        self.persist(key, &entities)
    }

    /// Persist `seed` as the initial collection if `key` is empty
    ///
    /// Idempotent: once any records exist (seeded or user-created), further
    /// calls are no-ops. A corrupt payload counts as empty, so seeding also
    /// recovers storage damaged out-of-band.
    pub fn seed_if_empty(&self, key: &str, seed: &[Entity]) -> Result<()> {
        if !self.list(key)?.is_empty() {
            debug!(collection = key, "collection already populated, not seeding");
            return Ok(());
        }
        debug!(collection = key, count = seed.len(), "seeding collection");
        self.persist(key, seed)
    }

    /// Delete the collection's key outright
    pub fn clear(&self, key: &str) -> Result<()> {
        debug!(collection = key, "clearing collection");
        self.backend.delete(key)
    }

    /// Keys of all collections present in the backend
    pub fn collections(&self) -> Result<Vec<String>> {
        self.backend.keys()
    }

    fn persist(&self, key: &str, entities: &[Entity]) -> Result<()> {
        let payload =
            serde_json::to_string(entities).map_err(|e| Error::Serialization(e.to_string()))?;
        debug!(collection = key, count = entities.len(), "persisting collection");
        self.backend.write(key, &payload)
    }
}

/// Generate a best-effort unique identifier
///
/// Shape: `<prefix>-<millis-since-epoch>-<8 hex chars>`. The random fragment
/// comes from a v4 UUID, so collisions need the same millisecond AND a 1 in
/// 2^32 draw. Good enough for human-entered record volumes; not a
/// cryptographic guarantee.
pub fn generate_id(prefix: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let rand = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{millis}-{}", &rand[..8])
}
