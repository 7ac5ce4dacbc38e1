//! Column descriptors and cell formatters
//!
//! Columns are declared by the caller, not inferred from data. A column names
//! the field it reads, how the header renders, and which of the engine's
//! capabilities (search, filter, sort) apply to it.
//!
//! Formatters are a closed enum of the known rendering kinds plus a `Custom`
//! escape hatch, rather than bare function values, so column configuration
//! stays inspectable and testable without a UI in the loop.

use gridkit_core::Value;
use std::fmt;
use std::sync::Arc;

/// Rendering applied to a cell value for display or export
#[derive(Clone, Default)]
pub enum CellFormat {
    /// The value's plain display string
    #[default]
    Raw,
    /// Currency with a symbol prefix and fixed decimals, e.g. `$1250.50`
    Currency {
        /// Symbol prepended to the amount
        symbol: String,
        /// Fractional digits to render
        decimals: u8,
    },
    /// Percentage with fixed decimals, e.g. `12.5%`
    Percent {
        /// Fractional digits to render
        decimals: u8,
    },
    /// Date rendered through a chrono format pattern
    ///
    /// Applies to `Value::Date` cells and to string cells holding an
    /// ISO-8601 date; anything else falls back to the display string.
    Date {
        /// chrono strftime pattern, e.g. `"%d %b %Y"`
        pattern: String,
    },
    /// Status-badge text; styling is a caller concern, the value renders
    /// as its plain display string
    Badge,
    /// Caller-supplied formatter
    Custom(Arc<dyn Fn(&Value) -> String + Send + Sync>),
}

impl fmt::Debug for CellFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellFormat::Raw => write!(f, "Raw"),
            CellFormat::Currency { symbol, decimals } => {
                write!(f, "Currency({symbol:?}, {decimals})")
            }
            CellFormat::Percent { decimals } => write!(f, "Percent({decimals})"),
            CellFormat::Date { pattern } => write!(f, "Date({pattern:?})"),
            CellFormat::Badge => write!(f, "Badge"),
            CellFormat::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl CellFormat {
    /// Currency with two decimals
    pub fn currency(symbol: impl Into<String>) -> Self {
        CellFormat::Currency {
            symbol: symbol.into(),
            decimals: 2,
        }
    }

    /// Date with the given chrono pattern
    pub fn date(pattern: impl Into<String>) -> Self {
        CellFormat::Date {
            pattern: pattern.into(),
        }
    }

    /// Caller-supplied formatter
    pub fn custom(f: impl Fn(&Value) -> String + Send + Sync + 'static) -> Self {
        CellFormat::Custom(Arc::new(f))
    }

    /// Render a value
    ///
    /// Total: values that do not fit the format kind (e.g. a string in a
    /// Currency column) fall back to their plain display string instead of
    /// erroring.
    pub fn format(&self, value: &Value) -> String {
        match self {
            CellFormat::Raw | CellFormat::Badge => value.to_display_string(),
            CellFormat::Currency { symbol, decimals } => match value.as_float() {
                Some(n) => format!("{symbol}{n:.prec$}", prec = *decimals as usize),
                None => value.to_display_string(),
            },
            CellFormat::Percent { decimals } => match value.as_float() {
                Some(n) => format!("{n:.prec$}%", prec = *decimals as usize),
                None => value.to_display_string(),
            },
            CellFormat::Date { pattern } => format_date(value, pattern),
            CellFormat::Custom(f) => f(value),
        }
    }
}

fn format_date(value: &Value, pattern: &str) -> String {
    let date = match value {
        Value::Date(d) => Some(*d),
        Value::Str(s) => chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
        _ => None,
    };
    match date {
        Some(d) => d.format(pattern).to_string(),
        None => value.to_display_string(),
    }
}

/// Declarative description of one table column
///
/// `searchable` defaults to true; sorting and filtering are opt-in, matching
/// the common case of a handful of sortable numeric columns among many plain
/// text ones.
#[derive(Debug, Clone)]
pub struct Column {
    /// Field key this column reads (the key `"id"` reads the entity id)
    pub key: String,
    /// Display header
    pub header: String,
    /// Header clicks cycle the sort on this column
    pub sortable: bool,
    /// This column accepts filter values
    pub filterable: bool,
    /// This column participates in free-text search
    pub searchable: bool,
    /// Optional fixed width hint, in characters
    pub width: Option<u16>,
    /// Discrete filter options to offer (informational; the engine accepts
    /// any filter value)
    pub options: Vec<Value>,
    /// Display formatter
    pub format: CellFormat,
    /// Export formatter; when absent, export uses the raw display string
    pub export_format: Option<CellFormat>,
}

impl Column {
    /// Create a searchable, unsorted, unfiltered column
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Column {
            key: key.into(),
            header: header.into(),
            sortable: false,
            filterable: false,
            searchable: true,
            width: None,
            options: Vec::new(),
            format: CellFormat::Raw,
            export_format: None,
        }
    }

    /// Builder: allow sorting on this column
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Builder: allow filtering on this column
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Builder: exclude this column from free-text search
    pub fn not_searchable(mut self) -> Self {
        self.searchable = false;
        self
    }

    /// Builder: fixed width hint
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Builder: discrete filter options
    pub fn with_options(mut self, options: Vec<Value>) -> Self {
        self.options = options;
        self
    }

    /// Builder: display formatter
    pub fn with_format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder: export formatter
    pub fn with_export_format(mut self, format: CellFormat) -> Self {
        self.export_format = Some(format);
        self
    }

    /// Render a cell for display
    pub fn display(&self, value: &Value) -> String {
        self.format.format(value)
    }

    /// Render a cell for export: export formatter if set, else the raw
    /// display string
    pub fn export_value(&self, value: &Value) -> String {
        match &self.export_format {
            Some(f) => f.format(value),
            None => value.to_display_string(),
        }
    }
}
