//! Table engine guarantees: pipeline composition, CSV round trip,
//! page-scoped selection, sort-cycle restoration

use gridkit::{Column, Entity, TableEngine, Value};

fn records_25() -> Vec<Entity> {
    // amounts descend as ids ascend so sorted order differs from insertion
    // order; even ids are Approved
    (1..=25)
        .map(|i| {
            Entity::new(format!("rec-{i:02}"))
                .with_field("amount", (1000 - i * 10) as i64)
                .with_field("status", if i % 2 == 0 { "Approved" } else { "Pending" })
        })
        .collect()
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID"),
        Column::new("amount", "Amount").sortable(),
        Column::new("status", "Status").filterable(),
    ]
}

/// Filter → sort desc → page 2 returns exactly ranks 11-20 of the filtered
/// set in descending amount order
#[test]
fn test_pipeline_composition() {
    let mut engine = TableEngine::new(columns()).with_rows({
        // 25 base records plus extras so the Approved set spans 3 pages
        let mut rows = records_25();
        rows.extend((26..=40).map(|i| {
            Entity::new(format!("rec-{i}"))
                .with_field("amount", (1000 - i * 10) as i64)
                .with_field("status", "Approved")
        }));
        rows
    });

    engine.set_filter("status", "Approved");
    engine.toggle_sort("amount");
    engine.toggle_sort("amount"); // descending

    let approved_desc: Vec<i64> = engine
        .derived()
        .iter()
        .map(|r| r.field("amount").and_then(Value::as_int).unwrap())
        .collect();
    assert!(approved_desc.windows(2).all(|w| w[0] >= w[1]));

    engine.set_page(2);
    let page: Vec<i64> = engine
        .page_rows()
        .iter()
        .map(|r| r.field("amount").and_then(Value::as_int).unwrap())
        .collect();
    assert_eq!(page, approved_desc[10..20].to_vec());
}

/// For comma/quote-free data, splitting the CSV by line and comma
/// reproduces headers and values in column order
#[test]
fn test_csv_round_trip_simple_data() {
    let engine = TableEngine::new(columns()).with_rows(records_25());
    let csv = engine.export_csv();
    let mut lines = csv.lines();

    let headers: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(headers, vec!["ID", "Amount", "Status"]);

    let first: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(first, vec!["rec-01", "990", "Pending"]);

    assert_eq!(csv.lines().count(), 26);
}

/// Select-all selects exactly the current page; flipping pages drops the
/// selection
#[test]
fn test_selection_scoped_to_page() {
    let mut engine = TableEngine::new(columns()).with_rows(records_25());

    engine.select_all();
    assert_eq!(engine.selected_rows().len(), 10);

    engine.set_page(2);
    assert_eq!(engine.selected_rows().len(), 0);
}

/// Three header clicks on the same column restore insertion order
#[test]
fn test_sort_cycle_restores_insertion_order() {
    let mut engine = TableEngine::new(columns()).with_rows(records_25());
    let before: Vec<String> = engine.derived().iter().map(|r| r.id.clone()).collect();

    engine.toggle_sort("amount");
    engine.toggle_sort("amount");
    engine.toggle_sort("amount");

    let after: Vec<String> = engine.derived().iter().map(|r| r.id.clone()).collect();
    assert_eq!(after, before);
}
