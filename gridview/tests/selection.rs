//! Tests for row selection.

mod common;

use common::{Product, columns, numbered, numbered_table, sample, sample_table};
use gridview::{
    Column, JsonKey, JsonRow, SelectionMode, TableConfig, TableController, ViewError,
};
use serde_json::json;

fn table_with_mode(mode: SelectionMode) -> TableController<Product> {
    let config = TableConfig::default().with_selection(mode);
    TableController::with_config(columns(), sample(), config).unwrap()
}

#[test]
fn test_selection_survives_filter() {
    let mut table = sample_table();
    table.toggle_row_selection(&1).unwrap();
    table.toggle_row_selection(&3).unwrap();

    table.set_filter_text("banana").unwrap();
    assert!(table.is_selected(&1));
    assert!(table.is_selected(&3));
    let view = table.view();
    assert_eq!(view.selected_count, 0);
    assert_eq!(view.total_selected, 2);
    assert_eq!(view.selection_summary(), "0 of 1 row(s) selected.");

    table.set_filter_text("").unwrap();
    let view = table.view();
    assert_eq!(view.selected_count, 2);
    assert_eq!(view.selection_summary(), "2 of 5 row(s) selected.");
}

#[test]
fn test_toggle_row_twice_deselects() {
    let mut table = sample_table();
    table.toggle_row_selection(&2).unwrap();
    table.toggle_row_selection(&2).unwrap();
    assert!(!table.is_selected(&2));
}

#[test]
fn test_selection_survives_paging() {
    let mut table = numbered_table(25);
    table.toggle_row_selection(&3).unwrap();
    table.next_page();
    table.toggle_row_selection(&15).unwrap();
    table.previous_page();

    let view = table.view();
    assert!(view.rows[2].selected);
    assert_eq!(view.selected_count, 2);
}

#[test]
fn test_toggle_all_page_rows() {
    let mut table = numbered_table(25);

    table.toggle_all_page_rows_selected();
    assert_eq!(table.view().total_selected, 10);

    table.next_page();
    table.toggle_all_page_rows_selected();
    assert_eq!(table.view().total_selected, 20);
    assert!(table.is_selected(&20));

    // Every row of page 0 is selected, so this deselects them.
    table.previous_page();
    table.toggle_all_page_rows_selected();
    assert_eq!(table.view().total_selected, 10);
    assert!(!table.is_selected(&1));
    assert!(table.is_selected(&11));
}

#[test]
fn test_toggle_all_selects_rest_of_partially_selected_page() {
    let mut table = numbered_table(25);
    table.toggle_row_selection(&4).unwrap();
    table.toggle_all_page_rows_selected();
    assert_eq!(table.view().selected_count, 10);
}

#[test]
fn test_stale_selection_dropped_on_new_rows() {
    let mut table = sample_table();
    table.toggle_row_selection(&1).unwrap();
    table.toggle_row_selection(&5).unwrap();

    let rows: Vec<Product> = sample().into_iter().filter(|p| p.id != 5).collect();
    table.set_rows(rows);

    assert!(table.is_selected(&1));
    assert!(!table.is_selected(&5));
    assert_eq!(table.view().total_selected, 1);
}

#[test]
fn test_selected_rows_in_source_order() {
    let mut table = sample_table();
    table.toggle_row_selection(&4).unwrap();
    table.toggle_row_selection(&2).unwrap();
    let ids: Vec<u32> = table.selected_rows().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 4]);
}

#[test]
fn test_clear_selection() {
    let mut table = numbered_table(25);
    table.toggle_all_page_rows_selected();
    table.clear_selection();
    assert_eq!(table.view().total_selected, 0);
}

#[test]
fn test_unknown_row() {
    let mut lenient = sample_table();
    assert!(lenient.toggle_row_selection(&99).is_ok());
    assert_eq!(lenient.view().total_selected, 0);

    let config = TableConfig::default().strict();
    let mut strict = TableController::with_config(columns(), numbered(3), config).unwrap();
    assert_eq!(
        strict.toggle_row_selection(&99),
        Err(ViewError::UnknownRow("99".to_string()))
    );
}

#[test]
fn test_single_selection_mode() {
    let mut table = table_with_mode(SelectionMode::Single);
    table.toggle_row_selection(&1).unwrap();
    table.toggle_row_selection(&2).unwrap();
    assert!(!table.is_selected(&1));
    assert!(table.is_selected(&2));

    table.toggle_all_page_rows_selected();
    assert_eq!(table.view().total_selected, 1);
}

#[test]
fn test_selection_disabled() {
    let mut table = table_with_mode(SelectionMode::None);
    table.toggle_row_selection(&1).unwrap();
    table.toggle_all_page_rows_selected();
    assert_eq!(table.view().total_selected, 0);
}

#[test]
fn test_json_rows_keyed_by_field_and_position_select_independently() {
    let rows = JsonRow::from_array(
        vec![json!({"id": 1, "name": "a"}), json!({"name": "b"})],
        Some("id"),
    );
    let mut table = TableController::new(vec![Column::new("name", "Name")], rows);

    table.toggle_row_selection(&JsonKey::from("1")).unwrap();

    let view = table.view();
    let flags: Vec<bool> = view.rows.iter().map(|row| row.selected).collect();
    assert_eq!(flags, vec![true, false]);
    assert_eq!(view.selection_summary(), "1 of 2 row(s) selected.");
}
