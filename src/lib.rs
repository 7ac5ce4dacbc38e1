//! Gridkit - embedded entity store and tabular view engine
//!
//! Gridkit provides two collaborating pieces for form-and-table
//! applications:
//!
//! - an **entity store**: synchronous CRUD over named collections of
//!   `{id, ...fields}` records, persisted as plain JSON through a pluggable
//!   storage backend (in-memory or file-per-collection)
//! - a **table engine**: search → filter → sort → paginate derivation over a
//!   record array, driven by declarative column/action configuration, with
//!   page-relative selection and CSV/JSON export
//!
//! # Quick Start
//!
//! ```
//! use gridkit::{Column, Entity, EntityStore, MemoryBackend, TableEngine};
//! use std::sync::Arc;
//!
//! let store = EntityStore::new(Arc::new(MemoryBackend::new()));
//! store.seed_if_empty("invoices", &[
//!     Entity::new("inv-1").with_field("vendor", "Acme").with_field("amount", 1200i64),
//! ])?;
//!
//! let mut table = TableEngine::new(vec![
//!     Column::new("id", "Invoice"),
//!     Column::new("vendor", "Vendor").sortable(),
//!     Column::new("amount", "Amount").sortable(),
//! ]);
//! table.set_rows(store.list("invoices")?);
//! table.set_search("acme");
//! assert_eq!(table.page_rows().len(), 1);
//! # Ok::<(), gridkit::Error>(())
//! ```
//!
//! # Architecture
//!
//! Pages hold the store and the engine; the store owns durability, the
//! engine owns the ephemeral view. Neither knows about the other: pages load
//! records from the store and push them into the engine, and persist edits
//! back through the store.

pub use gridkit_core::{Entity, Error, Result, Value, ValueRef};
pub use gridkit_store::{generate_id, EntityStore, FileBackend, MemoryBackend, StorageBackend};
pub use gridkit_table::{
    export_file_name, ActionVariant, CellFormat, Column, ExportFormat, FilterValue, RowAction,
    Sort, SortDirection, TableEngine, ViewState, DEFAULT_PAGE_SIZE,
};
