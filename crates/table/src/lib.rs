//! Tabular view engine for Gridkit
//!
//! Takes a raw entity array plus declarative column/action configuration and
//! derives a searched → filtered → sorted → paginated view, with
//! page-relative row selection and CSV/JSON export.
//!
//! ## Invariant
//!
//! The visible view is a pure function of (rows, view state). Every query
//! re-derives the pipeline from scratch; there is no cached derived state to
//! fall out of sync.
//!
//! ## Module Structure
//!
//! - [`column`]: column descriptors and cell formatters
//! - [`action`]: row/bulk action descriptors
//! - [`view`]: ephemeral view state (search, filters, sort, page, selection)
//! - [`engine`]: the [`TableEngine`] owning rows + config + view state
//! - [`export`]: CSV/JSON rendering and the export sink seam

pub mod action;
pub mod column;
pub mod engine;
pub mod export;
pub mod view;

pub use action::{ActionVariant, RowAction};
pub use column::{CellFormat, Column};
pub use engine::TableEngine;
pub use export::{export_file_name, ExportFormat};
pub use view::{FilterValue, Sort, SortDirection, ViewState, DEFAULT_PAGE_SIZE};
