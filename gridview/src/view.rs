//! Render snapshot handed to the presentation layer.

use crate::column::Column;
use crate::pagination::PageSize;
use crate::row::TableRow;
use crate::sort::SortDirection;

/// A visible column header.
#[derive(Debug)]
pub struct HeaderCell<'a, T> {
    /// The column descriptor.
    pub column: &'a Column<T>,
    /// Current sort direction of this column.
    pub sort: Option<SortDirection>,
    /// Priority among the sort keys, only set when more than one key is active.
    pub sort_position: Option<usize>,
}

/// A row on the current page.
#[derive(Debug)]
pub struct ViewRow<'a, T: TableRow> {
    /// Row key.
    pub key: T::Key,
    /// The underlying record.
    pub record: &'a T,
    /// Whether the row is selected.
    pub selected: bool,
    /// Rendered cells, one per visible column.
    pub cells: Vec<String>,
}

/// One entry of the column visibility menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnToggle {
    /// Column id.
    pub id: String,
    /// Header text.
    pub header: String,
    /// Whether the column is currently shown.
    pub visible: bool,
}

/// Everything needed to draw the table for the current view state.
#[derive(Debug)]
pub struct TableView<'a, T: TableRow> {
    /// Visible column headers, in schema order.
    pub headers: Vec<HeaderCell<'a, T>>,
    /// Rows of the current page.
    pub rows: Vec<ViewRow<'a, T>>,
    /// Designated filter column.
    pub filter_column: String,
    /// Current filter text.
    pub filter_text: String,
    /// Rows passing the filter.
    pub filtered_count: usize,
    /// Rows in the data source.
    pub total_count: usize,
    /// Selected rows among the filtered rows.
    pub selected_count: usize,
    /// Selected rows overall, including filtered-out ones.
    pub total_selected: usize,
    /// Zero-based page index.
    pub page_index: usize,
    /// Number of pages; zero when no row passes the filter.
    pub page_count: usize,
    /// Number of pages to display; at least one.
    pub display_page_count: usize,
    /// Rows per page.
    pub page_size: PageSize,
    /// Page size choices.
    pub page_size_options: [PageSize; 5],
    /// Whether "previous page" is enabled.
    pub can_previous_page: bool,
    /// Whether "next page" is enabled.
    pub can_next_page: bool,
}

impl<T: TableRow> TableView<'_, T> {
    /// Footer text, e.g. `2 of 25 row(s) selected.`
    pub fn selection_summary(&self) -> String {
        format!(
            "{} of {} row(s) selected.",
            self.selected_count, self.filtered_count
        )
    }

    /// Page indicator, e.g. `Page 1 of 3`.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.display_page_count)
    }

    /// Returns `true` if the current page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
