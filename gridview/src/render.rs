//! Plain-text rendering of a [`TableView`].
//!
//! Widths are measured in terminal columns, so wide characters (CJK, emoji)
//! line up.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::row::TableRow;
use crate::sort::SortDirection;
use crate::view::{HeaderCell, TableView};

const SEPARATOR: &str = "  ";
const CHECKED: &str = "■";
const UNCHECKED: &str = "□";
const ELLIPSIS: &str = "…";

/// Message shown in place of rows when nothing passes the filter.
pub const EMPTY_MESSAGE: &str = "No results.";

/// Terminal columns occupied by `s`; wide characters count as two.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Truncate to `max_width` columns, ending with `…` when anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push_str(ELLIPSIS);
    result
}

/// Right-pad with spaces up to `width` columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(padding))
}

/// Header text including the sort marker, e.g. `Price ▲` or `Price ▼2`.
pub fn header_label<T>(header: &HeaderCell<'_, T>) -> String {
    let marker = match header.sort {
        Some(SortDirection::Ascending) => "▲",
        Some(SortDirection::Descending) => "▼",
        None => return header.column.header.clone(),
    };
    match header.sort_position {
        Some(position) => format!("{} {}{}", header.column.header, marker, position + 1),
        None => format!("{} {}", header.column.header, marker),
    }
}

/// Render the view as a text grid with a footer.
///
/// Layout:
///
/// ```text
/// □  Name ▲   Price
/// ─────────────────
/// ■  Monitor  180
/// □  Mouse    25
///
/// 1 of 2 row(s) selected.
/// Rows per page 10  Page 1 of 1
/// ```
///
/// Cells wider than `max_cell_width` are truncated with `…`.
pub fn render_table<T: TableRow>(view: &TableView<'_, T>, max_cell_width: usize) -> String {
    let max_cell_width = max_cell_width.max(1);
    let labels: Vec<String> = view.headers.iter().map(header_label).collect();

    let widths: Vec<usize> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let cells = view
                .rows
                .iter()
                .filter_map(|row| row.cells.get(i))
                .map(|cell| display_width(cell));
            cells
                .chain(std::iter::once(display_width(label)))
                .max()
                .unwrap_or(0)
                .min(max_cell_width)
        })
        .collect();

    let all_selected = !view.rows.is_empty() && view.rows.iter().all(|row| row.selected);
    let mut lines = Vec::new();

    let header = format_line(
        if all_selected { CHECKED } else { UNCHECKED },
        labels.iter().map(String::as_str),
        &widths,
    );
    let rule_width = display_width(&header).max(display_width(EMPTY_MESSAGE));
    lines.push(header);
    lines.push("─".repeat(rule_width));

    if view.rows.is_empty() {
        lines.push(EMPTY_MESSAGE.to_string());
    }
    for row in &view.rows {
        lines.push(format_line(
            if row.selected { CHECKED } else { UNCHECKED },
            row.cells.iter().map(String::as_str),
            &widths,
        ));
    }

    lines.push(String::new());
    lines.push(view.selection_summary());
    lines.push(format!(
        "Rows per page {}{}{}",
        view.page_size,
        SEPARATOR,
        view.page_label()
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn format_line<'a>(checkbox: &str, cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut line = String::from(checkbox);
    for (cell, &width) in cells.zip(widths) {
        line.push_str(SEPARATOR);
        line.push_str(&pad_to_width(&truncate_to_width(cell, width), width));
    }
    line.trim_end().to_string()
}
