//! TableEngine: the derivation pipeline and its view state
//!
//! ## Design
//!
//! The engine owns three things: the raw rows, the column/action
//! configuration, and the ephemeral [`ViewState`]. Every read-side method
//! re-derives `search → filter → sort → paginate` from those inputs; nothing
//! derived is cached, so the visible view can never drift from the state
//! that defines it.
//!
//! ## Input changes reset position
//!
//! Changing search, filter, or sort snaps back to page 1 and clears the
//! selection. Staying on page 3 of a view that shrank to one page would
//! render an empty page, and a page-relative selection kept across a
//! re-derivation would silently point at different rows.
//!
//! ## Silent no-ops
//!
//! Header clicks on non-sortable or unknown columns, filters on
//! non-filterable columns, and out-of-range selection indices are ignored
//! rather than errors. Configuration misuse is a caller bug the engine
//! tolerates.

use crate::action::RowAction;
use crate::column::Column;
use crate::export::{self, ExportFormat};
use crate::view::{FilterValue, Sort, SortDirection, ViewState};
use gridkit_core::Entity;
use tracing::trace;

/// Tabular view over an entity array
pub struct TableEngine {
    rows: Vec<Entity>,
    columns: Vec<Column>,
    actions: Vec<RowAction>,
    view: ViewState,
}

impl TableEngine {
    /// Create an engine with the given columns and no rows
    pub fn new(columns: Vec<Column>) -> Self {
        TableEngine {
            rows: Vec::new(),
            columns,
            actions: Vec::new(),
            view: ViewState::default(),
        }
    }

    /// Builder: row actions
    pub fn with_actions(mut self, actions: Vec<RowAction>) -> Self {
        self.actions = actions;
        self
    }

    /// Builder: rows per page
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.view.page_size = page_size.max(1);
        self
    }

    /// Builder: initial rows
    pub fn with_rows(mut self, rows: Vec<Entity>) -> Self {
        self.rows = rows;
        self
    }

    // ========== Configuration & state accessors ==========

    /// Column configuration
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Action configuration
    pub fn actions(&self) -> &[RowAction] {
        &self.actions
    }

    /// Raw rows, in insertion order
    pub fn rows(&self) -> &[Entity] {
        &self.rows
    }

    /// Current view state
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Replace the raw rows (e.g. after a store refresh)
    ///
    /// Search, filters, and sort survive; page and selection reset because
    /// the row set they referred to is gone.
    pub fn set_rows(&mut self, rows: Vec<Entity>) {
        self.rows = rows;
        self.view.reset_position();
    }

    // ========== View-state transitions ==========

    /// Set the free-text search
    pub fn set_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.view.search != text {
            self.view.search = text;
            self.view.reset_position();
        }
    }

    /// Set a filter on a column
    ///
    /// No-op unless the column exists and is filterable.
    pub fn set_filter(&mut self, key: &str, filter: impl Into<FilterValue>) {
        if !self.columns.iter().any(|c| c.key == key && c.filterable) {
            trace!(column = key, "ignoring filter on non-filterable column");
            return;
        }
        self.view.filters.insert(key.to_string(), filter.into());
        self.view.reset_position();
    }

    /// Remove a column's filter
    pub fn clear_filter(&mut self, key: &str) {
        if self.view.filters.remove(key).is_some() {
            self.view.reset_position();
        }
    }

    /// Remove all filters
    pub fn clear_filters(&mut self) {
        if !self.view.filters.is_empty() {
            self.view.filters.clear();
            self.view.reset_position();
        }
    }

    /// Header click: advance the sort cycle on a column
    ///
    /// none → ascending → descending → none on the same column; a different
    /// column restarts at ascending. No-op unless the column exists and is
    /// sortable.
    pub fn toggle_sort(&mut self, key: &str) {
        if !self.columns.iter().any(|c| c.key == key && c.sortable) {
            trace!(column = key, "ignoring sort on non-sortable column");
            return;
        }
        self.view.sort = Sort::cycle(self.view.sort.as_ref(), key);
        self.view.reset_position();
    }

    /// Jump to a page, clamped into `1..=page_count`
    ///
    /// Changing page drops the selection: indices are page-relative and
    /// would otherwise re-target different rows.
    pub fn set_page(&mut self, page: usize) {
        let clamped = page.clamp(1, self.page_count());
        if clamped != self.view.page {
            self.view.page = clamped;
            self.view.selected.clear();
        }
    }

    /// Change the page size, snapping back to page 1
    pub fn set_page_size(&mut self, page_size: usize) {
        self.view.page_size = page_size.max(1);
        self.view.reset_position();
    }

    // ========== Derivation pipeline ==========

    /// The full filtered and sorted row set (all pages)
    pub fn derived(&self) -> Vec<&Entity> {
        let needle = self.view.search.to_lowercase();
        let mut out: Vec<&Entity> = self
            .rows
            .iter()
            .filter(|row| self.matches_search(row, &needle))
            .filter(|row| self.matches_filters(row))
            .collect();

        if let Some(sort) = &self.view.sort {
            // Stable sort keeps equal keys in input order, so repeated
            // derivations never jitter
            out.sort_by(|a, b| {
                let ord = a.value_of(&sort.key).total_cmp(b.value_of(&sort.key));
                match sort.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
        out
    }

    fn matches_search(&self, row: &Entity, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.columns.iter().filter(|c| c.searchable).any(|c| {
            row.value_of(&c.key)
                .to_display_string()
                .to_lowercase()
                .contains(needle)
        })
    }

    fn matches_filters(&self, row: &Entity) -> bool {
        self.view
            .filters
            .iter()
            .all(|(key, filter)| filter.matches(row.value_of(key)))
    }

    /// Number of pages (at least 1, even when empty)
    pub fn page_count(&self) -> usize {
        let len = self.derived().len().max(1);
        (len + self.view.page_size - 1) / self.view.page_size
    }

    /// Rows rendered on the current page
    pub fn page_rows(&self) -> Vec<&Entity> {
        let derived = self.derived();
        let start = (self.view.page - 1) * self.view.page_size;
        derived
            .into_iter()
            .skip(start)
            .take(self.view.page_size)
            .collect()
    }

    // ========== Selection (page-relative) ==========

    /// Toggle selection of one row on the current page
    ///
    /// Out-of-range indices are ignored.
    pub fn toggle_row(&mut self, index: usize) {
        if index >= self.page_rows().len() {
            return;
        }
        if !self.view.selected.remove(&index) {
            self.view.selected.insert(index);
        }
    }

    /// Select exactly the rows rendered on the current page
    pub fn select_all(&mut self) {
        self.view.selected = (0..self.page_rows().len()).collect();
    }

    /// Drop the selection
    pub fn clear_selection(&mut self) {
        self.view.selected.clear();
    }

    /// Currently selected rows, in page order
    pub fn selected_rows(&self) -> Vec<&Entity> {
        let page = self.page_rows();
        self.view
            .selected
            .iter()
            .filter_map(|&i| page.get(i).copied())
            .collect()
    }

    /// Hand the selected rows to a bulk action and clear the selection
    ///
    /// The callback sees clones: bulk handlers typically mutate and persist
    /// the rows, then push a fresh array back via [`set_rows`].
    ///
    /// [`set_rows`]: TableEngine::set_rows
    pub fn run_bulk<F>(&mut self, mut bulk: F)
    where
        F: FnMut(&[Entity]),
    {
        let targets: Vec<Entity> = self.selected_rows().into_iter().cloned().collect();
        bulk(&targets);
        self.view.selected.clear();
    }

    // ========== Actions ==========

    /// Actions visible for one row
    pub fn visible_actions(&self, row: &Entity) -> Vec<&RowAction> {
        self.actions.iter().filter(|a| a.is_visible(row)).collect()
    }

    // ========== Export ==========

    /// Rows a caller-supplied export sink targets: the selection if any,
    /// else the full filtered/sorted set (never just the current page)
    ///
    /// Only the sink path is selection-aware; the built-in CSV/JSON
    /// renderers always cover the whole derived set.
    pub fn export_rows(&self) -> Vec<&Entity> {
        if self.view.selected.is_empty() {
            self.derived()
        } else {
            self.selected_rows()
        }
    }

    /// Render the full filtered/sorted dataset as CSV
    ///
    /// The selection does not narrow this output.
    pub fn export_csv(&self) -> String {
        export::to_csv(&self.columns, &self.derived())
    }

    /// Render the full filtered/sorted dataset as JSON
    pub fn export_json(&self) -> String {
        export::to_json(&self.columns, &self.derived())
    }

    /// Hand the export target to a caller-supplied sink
    ///
    /// The engine does not interpret the format; the sink decides what the
    /// label means.
    pub fn export_with<F>(&self, format: ExportFormat, sink: F)
    where
        F: FnOnce(&[&Entity], ExportFormat),
    {
        sink(&self.export_rows(), format);
    }
}
