//! Storage layer for Gridkit
//!
//! Two pieces:
//! - [`StorageBackend`]: the seam between the entity store and whatever
//!   actually holds the bytes, with in-memory and file-per-collection
//!   implementations
//! - [`EntityStore`]: synchronous CRUD over named collections of
//!   [`Entity`](gridkit_core::Entity) records
//!
//! The store is a stateless facade: it holds only an `Arc<dyn
//! StorageBackend>` and re-reads the full collection on every operation.
//! Collections are small (form-entry scale); simplicity beats cleverness
//! here.

pub mod backend;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use store::{generate_id, EntityStore};
