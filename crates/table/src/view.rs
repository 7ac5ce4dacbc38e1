//! Ephemeral view state
//!
//! Everything here is per-table-instance and never persisted: search text,
//! active filters, the single active sort, the current page, and the
//! page-relative selection. Dropping the engine drops the view state.
//!
//! ## Selection scope
//!
//! Selection indices are relative to the CURRENT page's rendered rows, and
//! "select all" means "all rows on this page". That matches the behavior the
//! engine was specified against; whether select-all should instead cover the
//! full filtered set is a product decision, so the convention is isolated
//! here rather than leaked through the API.

use gridkit_core::{Value, ValueRef};
use std::collections::{BTreeMap, BTreeSet};

/// Default rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first
    Ascending,
    /// Largest first
    Descending,
}

/// The single active sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    /// Column key being sorted
    pub key: String,
    /// Direction
    pub direction: SortDirection,
}

impl Sort {
    /// Ascending sort on `key`
    pub fn ascending(key: impl Into<String>) -> Self {
        Sort {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on `key`
    pub fn descending(key: impl Into<String>) -> Self {
        Sort {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Advance the none → asc → desc → none cycle for a header click
    ///
    /// Clicking a different column restarts at ascending.
    pub fn cycle(current: Option<&Sort>, key: &str) -> Option<Sort> {
        match current {
            Some(s) if s.key == key => match s.direction {
                SortDirection::Ascending => Some(Sort::descending(key)),
                SortDirection::Descending => None,
            },
            _ => Some(Sort::ascending(key)),
        }
    }
}

/// An active filter on one column
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Keep rows whose value equals this value
    One(Value),
    /// Keep rows whose value is a member of this list
    Many(Vec<Value>),
}

impl FilterValue {
    /// True if this entry means "no filter"
    ///
    /// Null and empty-string single values, and empty lists, deactivate the
    /// filter so that a cleared dropdown does not filter everything out.
    pub fn is_inactive(&self) -> bool {
        match self {
            FilterValue::One(Value::Null) => true,
            FilterValue::One(Value::Str(s)) => s.is_empty(),
            FilterValue::One(_) => false,
            FilterValue::Many(vs) => vs.is_empty(),
        }
    }

    /// Whether a row's value passes this filter
    pub fn matches(&self, value: ValueRef<'_>) -> bool {
        if self.is_inactive() {
            return true;
        }
        match self {
            FilterValue::One(v) => value.matches(v),
            FilterValue::Many(vs) => vs.iter().any(|v| value.matches(v)),
        }
    }
}

impl From<Value> for FilterValue {
    fn from(v: Value) -> Self {
        FilterValue::One(v)
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::One(Value::from(s))
    }
}

impl From<Vec<Value>> for FilterValue {
    fn from(vs: Vec<Value>) -> Self {
        FilterValue::Many(vs)
    }
}

/// Per-instance, never-persisted view state
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Free-text search, matched case-insensitively against searchable
    /// columns
    pub search: String,
    /// Active filters, column key → filter value; inactive entries are
    /// ignored
    pub filters: BTreeMap<String, FilterValue>,
    /// The single active sort, if any
    pub sort: Option<Sort>,
    /// Current page, 1-based
    pub page: usize,
    /// Rows per page
    pub page_size: usize,
    /// Selected row indices, relative to the current page's rendered rows
    pub selected: BTreeSet<usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            search: String::new(),
            filters: BTreeMap::new(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            selected: BTreeSet::new(),
        }
    }
}

impl ViewState {
    /// Snap back to page 1 and drop the selection
    ///
    /// Called whenever search, filter, or sort input changes, so the view
    /// never lands on an out-of-range page and the selection never silently
    /// re-targets different rows.
    pub fn reset_position(&mut self) {
        self.page = 1;
        self.selected.clear();
    }
}
