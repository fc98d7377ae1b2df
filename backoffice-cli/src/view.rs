//! `view` command: load records and render one page of the table.

use std::fs;
use std::path::Path;

use gridview::{
    Column, JsonKey, JsonRow, OperationPolicy, SortDirection, SortGesture, TableConfig,
    TableController, TableRow, render_table,
};
use log::{debug, info};
use serde_json::Value;

use crate::cli::ViewArgs;
use crate::error::CliError;

pub fn run(args: &ViewArgs) -> Result<String, CliError> {
    let config = load_config(args)?;
    let rows = load_rows(&args.data, args.key_field.as_deref())?;
    let columns = if args.columns.is_empty() {
        infer_columns(&rows)
    } else {
        args.columns.iter().map(|id| column(id)).collect()
    };
    info!(
        "Loaded {} rows with {} columns from {}",
        rows.len(),
        columns.len(),
        args.data.display()
    );

    let mut table = TableController::with_config(columns, rows, config)?;
    apply(&mut table, args)?;

    let view = table.view();
    let mut out = String::new();
    if !view.filter_text.is_empty() {
        out.push_str(&format!("{}: {}\n", table.filter_placeholder(), view.filter_text));
    }
    let hidden: Vec<String> = table
        .hideable_columns()
        .into_iter()
        .filter(|entry| !entry.visible)
        .map(|entry| entry.header)
        .collect();
    if !hidden.is_empty() {
        out.push_str(&format!("Hidden: {}\n", hidden.join(", ")));
    }
    out.push_str(&render_table(&view, table.config().max_cell_width));
    Ok(out)
}

/// Config file first, then flags on top.
fn load_config(args: &ViewArgs) -> Result<TableConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
            TableConfig::from_json(&json).map_err(|e| CliError::json(path, e))?
        }
        None => TableConfig::default(),
    };
    if let Some(column) = &args.filter_column {
        config.filter_column = column.clone();
    }
    if let Some(size) = args.page_size {
        config.page_size = size;
    }
    if args.strict {
        config.policy = OperationPolicy::Strict;
    }
    debug!("Table config: {:?}", config);
    Ok(config)
}

fn load_rows(path: &Path, key_field: Option<&str>) -> Result<Vec<JsonRow>, CliError> {
    let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let value: Value = serde_json::from_str(&text).map_err(|e| CliError::json(path, e))?;
    match value {
        Value::Array(values) => Ok(JsonRow::from_array(values, key_field)),
        _ => Err(CliError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

/// Every field name, in first-seen order.
fn infer_columns(rows: &[JsonRow]) -> Vec<Column<JsonRow>> {
    let mut ids: Vec<&str> = Vec::new();
    for row in rows {
        for name in row.field_names() {
            if !ids.contains(&name) {
                ids.push(name);
            }
        }
    }
    ids.into_iter().map(column).collect()
}

fn column(id: &str) -> Column<JsonRow> {
    Column::new(id, header_for(id))
}

/// `unit_price` -> `Unit price`
fn header_for(id: &str) -> String {
    let spaced = id.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Apply the flags in interaction order: visibility, sort, filter, selection,
/// then the page cursor (sort and filter go back to page 0).
fn apply(table: &mut TableController<JsonRow>, args: &ViewArgs) -> Result<(), CliError> {
    for id in &args.hide {
        table.toggle_column_visibility(id, false)?;
    }
    for sort in &args.sort {
        table.set_sort(&sort.column, SortGesture::Additive)?;
        if sort.direction == SortDirection::Descending
            && table.sort_direction(&sort.column) == Some(SortDirection::Ascending)
        {
            table.set_sort(&sort.column, SortGesture::Additive)?;
        }
    }
    if let Some(text) = &args.filter {
        table.set_filter_text(text.as_str())?;
    }
    for key in &args.select {
        let key = resolve_key(table, key);
        table.toggle_row_selection(&key)?;
    }
    table.set_page_index(args.page.saturating_sub(1));
    debug!(
        "Showing page {} of {} ({} selected)",
        table.page_index() + 1,
        table.page_count(),
        table.selected_rows().count()
    );
    Ok(())
}

/// Match a `--select` value against row keys as printed (`#3` for positions).
fn resolve_key(table: &TableController<JsonRow>, text: &str) -> JsonKey {
    table
        .rows()
        .iter()
        .map(TableRow::key)
        .find(|key| key.to_string() == text)
        .unwrap_or_else(|| JsonKey::from(text))
}
