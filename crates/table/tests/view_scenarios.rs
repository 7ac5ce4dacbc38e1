//! End-to-end view scenarios
//!
//! Drives the engine the way a page component would: seed records, then
//! interleave search, filter, sort, page, and selection changes and check
//! the derived view after each step.

use gridkit_core::{Entity, Value};
use gridkit_table::{CellFormat, Column, FilterValue, RowAction, TableEngine};

fn purchase_orders() -> Vec<Entity> {
    let statuses = ["Draft", "Submitted", "Approved"];
    (1..=12)
        .map(|i| {
            Entity::new(format!("po-{i:03}"))
                .with_field("supplier", format!("Supplier {}", (b'A' + (i % 4) as u8) as char))
                .with_field("total", (i * 250) as i64)
                .with_field("status", statuses[(i % 3) as usize])
        })
        .collect()
}

fn po_columns() -> Vec<Column> {
    vec![
        Column::new("id", "PO Number"),
        Column::new("supplier", "Supplier").sortable(),
        Column::new("total", "Total")
            .sortable()
            .not_searchable()
            .with_format(CellFormat::currency("$")),
        Column::new("status", "Status").filterable().with_options(vec![
            Value::from("Draft"),
            Value::from("Submitted"),
            Value::from("Approved"),
        ]),
    ]
}

#[test]
fn test_filter_then_sort_then_page() {
    let mut engine = TableEngine::new(po_columns())
        .with_page_size(2)
        .with_rows(purchase_orders());

    engine.set_filter("status", "Approved");
    engine.toggle_sort("total");
    engine.toggle_sort("total"); // descending

    let all: Vec<i64> = engine
        .derived()
        .iter()
        .map(|r| r.field("total").and_then(Value::as_int).unwrap())
        .collect();
    let mut expected = all.clone();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(all, expected);

    engine.set_page(2);
    let page: Vec<i64> = engine
        .page_rows()
        .iter()
        .map(|r| r.field("total").and_then(Value::as_int).unwrap())
        .collect();
    assert_eq!(page, all[2..4].to_vec());
}

#[test]
fn test_narrowing_search_from_deep_page_lands_on_page_one() {
    let mut engine = TableEngine::new(po_columns())
        .with_page_size(2)
        .with_rows(purchase_orders());

    engine.set_page(5);
    engine.set_search("supplier a");
    assert_eq!(engine.view().page, 1);
    assert!(engine.page_rows().len() <= 2);
    assert!(!engine.derived().is_empty());
}

#[test]
fn test_clearing_filter_restores_full_set() {
    let mut engine = TableEngine::new(po_columns()).with_rows(purchase_orders());

    engine.set_filter("status", "Draft");
    let narrowed = engine.derived().len();
    assert!(narrowed < 12);

    engine.clear_filter("status");
    assert_eq!(engine.derived().len(), 12);
}

#[test]
fn test_inactive_filter_value_means_no_filter() {
    let mut engine = TableEngine::new(po_columns()).with_rows(purchase_orders());
    engine.set_filter("status", FilterValue::One(Value::Str(String::new())));
    assert_eq!(engine.derived().len(), 12);
}

#[test]
fn test_csv_export_of_filtered_view_uses_formatters() {
    let mut engine = TableEngine::new(vec![
        Column::new("id", "PO Number"),
        Column::new("total", "Total").with_export_format(CellFormat::currency("$")),
    ])
    .with_rows(purchase_orders());

    engine.set_search("po-001");
    let csv = engine.export_csv();
    assert_eq!(csv, "PO Number,Total\npo-001,$250.00\n");
}

#[test]
fn test_bulk_action_over_selection() {
    let actions = vec![RowAction::new("Submit")
        .visible_when(|r| r.field("status") == Some(&Value::Str("Draft".into())))];
    let mut engine = TableEngine::new(po_columns())
        .with_actions(actions)
        .with_page_size(5)
        .with_rows(purchase_orders());

    engine.set_filter("status", "Draft");
    engine.select_all();

    let mut submitted = Vec::new();
    engine.run_bulk(|rows| {
        for row in rows {
            submitted.push(row.id.clone());
        }
    });

    assert!(!submitted.is_empty());
    assert!(engine.selected_rows().is_empty());
}
