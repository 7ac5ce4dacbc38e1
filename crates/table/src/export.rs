//! Export rendering
//!
//! Two built-in renderings of an exported row set:
//! - CSV with correct quoting (fields containing comma, quote, or newline
//!   are wrapped in double quotes, embedded quotes doubled)
//! - JSON as an array of objects keyed by column key
//!
//! Callers that want a different format supply their own sink; the engine
//! hands over the target rows and the chosen format label without
//! interpreting either.

use crate::column::Column;
use gridkit_core::Entity;

/// Built-in export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values
    Csv,
    /// JSON array of objects
    Json,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Suggested download file name: `export.<ext>`
pub fn export_file_name(format: ExportFormat) -> String {
    format!("export.{}", format.extension())
}

/// Quote a CSV field if it needs it
///
/// A field needs quoting when it contains a comma, a double quote, or a line
/// break; embedded quotes are escaped by doubling.
fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

/// Render rows as CSV
///
/// Header row carries the column headers; each cell goes through the
/// column's export formatter when one is set, else the raw display string.
/// Rows are `\n`-separated with a trailing newline.
pub fn to_csv(columns: &[Column], rows: &[&Entity]) -> String {
    let mut out = String::new();

    let header: Vec<String> = columns.iter().map(|c| csv_field(&c.header)).collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| csv_field(&c.export_value(&row.value_of(&c.key).to_value())))
            .collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }

    out
}

/// Render rows as a JSON array of objects keyed by column key
///
/// Columns with an export formatter contribute formatted strings; columns
/// without keep their raw typed values.
pub fn to_json(columns: &[Column], rows: &[&Entity]) -> String {
    let array: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            let mut obj = serde_json::Map::new();
            for c in columns {
                let value = row.value_of(&c.key).to_value();
                let cell = match &c.export_format {
                    Some(f) => serde_json::Value::String(f.format(&value)),
                    None => serde_json::to_value(&value)
                        .unwrap_or(serde_json::Value::Null),
                };
                obj.insert(c.key.clone(), cell);
            }
            serde_json::Value::Object(obj)
        })
        .collect();

    // Serializing a tree of plain JSON values cannot fail
    serde_json::to_string_pretty(&array).unwrap_or_else(|_| "[]".to_string())
}
