//! Tabular view controller.

use std::collections::HashSet;

use log::{debug, trace, warn};

use crate::column::{Column, same_schema};
use crate::config::{OperationPolicy, TableConfig};
use crate::error::ViewError;
use crate::filter::FilterSpec;
use crate::pagination::PageSize;
use crate::row::TableRow;
use crate::sort::{SortDirection, SortGesture, sort_indices};
use crate::state::{Tracked, ViewState};
use crate::view::{ColumnToggle, HeaderCell, TableView, ViewRow};

/// Owns the view state of one table and derives what to render from it.
///
/// The controller never fetches or mutates the data it displays. Rows and
/// column descriptors come from the data source through [`set_rows`] and
/// [`set_columns`]; everything else is view state.
///
/// The derived pipeline runs in a fixed order:
/// 1. filter on the designated column,
/// 2. stable multi-key sort,
/// 3. visibility picks the rendered columns,
/// 4. pagination slices the result.
///
/// Steps 1 and 2 are recomputed eagerly when rows, filter or sort change and
/// cached as an index list, so reads are cheap and repeatable.
///
/// # Example
///
/// ```
/// use gridview::{Column, JsonRow, SortGesture, TableController};
/// use serde_json::json;
///
/// let rows = JsonRow::from_array(
///     vec![json!({"name": "Mouse", "price": 25}), json!({"name": "Monitor", "price": 180})],
///     None,
/// );
/// let columns = vec![Column::new("name", "Name"), Column::new("price", "Price")];
/// let mut table = TableController::new(columns, rows);
///
/// table.set_filter_text("mo")?;
/// table.set_sort("price", SortGesture::Replace)?;
///
/// let view = table.view();
/// assert_eq!(view.filtered_count, 2);
/// assert_eq!(view.rows[0].cells, vec!["Mouse", "25"]);
/// # Ok::<(), gridview::ViewError>(())
/// ```
///
/// [`set_rows`]: TableController::set_rows
/// [`set_columns`]: TableController::set_columns
pub struct TableController<T: TableRow> {
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    config: TableConfig,
    state: Tracked<ViewState<T::Key>>,
    /// Filtered and sorted row indices.
    processed: Vec<usize>,
}

impl<T: TableRow> TableController<T> {
    /// Create a controller with the default configuration.
    pub fn new(columns: Vec<Column<T>>, rows: Vec<T>) -> Self {
        let config = TableConfig::default();
        let state = Self::fresh_state(&config, PageSize::DEFAULT);
        let mut controller = Self {
            columns,
            rows,
            config,
            state: Tracked::new(state),
            processed: Vec::new(),
        };
        controller.recompute();
        controller
    }

    /// Create a controller with a configuration.
    ///
    /// An invalid initial page size goes through the configured policy.
    pub fn with_config(
        columns: Vec<Column<T>>,
        rows: Vec<T>,
        config: TableConfig,
    ) -> Result<Self, ViewError> {
        let page_size = Self::resolve_page_size(config.policy, config.page_size)?;
        let state = Self::fresh_state(&config, page_size);
        let mut controller = Self {
            columns,
            rows,
            config,
            state: Tracked::new(state),
            processed: Vec::new(),
        };
        controller.recompute();
        Ok(controller)
    }

    fn fresh_state(config: &TableConfig, page_size: PageSize) -> ViewState<T::Key> {
        ViewState::new(config.filter_column.clone(), page_size, config.selection)
    }

    fn resolve_page_size(policy: OperationPolicy, size: usize) -> Result<PageSize, ViewError> {
        match PageSize::new(size) {
            Some(page_size) => Ok(page_size),
            None => match policy {
                OperationPolicy::Strict => Err(ViewError::InvalidPageSize { requested: size }),
                OperationPolicy::Lenient => {
                    let nearest = PageSize::nearest(size);
                    warn!("Invalid page size {}, using {}", size, nearest);
                    Ok(nearest)
                }
            },
        }
    }

    /// Route an invalid operation through the policy.
    fn reject(&self, error: ViewError) -> Result<(), ViewError> {
        match self.config.policy {
            OperationPolicy::Strict => Err(error),
            OperationPolicy::Lenient => {
                warn!("Ignoring table operation: {}", error);
                Ok(())
            }
        }
    }

    /// Re-run filter and sort, then clamp the page cursor.
    fn recompute(&mut self) {
        let state = self.state.get();
        let mut indices = state.filter.apply(&self.rows, self.config.text_match);
        sort_indices(&self.rows, &mut indices, &state.sort);
        trace!(
            "Recomputed row model: {} of {} rows, {} sort keys",
            indices.len(),
            self.rows.len(),
            state.sort.keys().len()
        );
        self.processed = indices;

        let total = self.processed.len();
        self.state.update(|s| (s.pagination.clamp(total), ()));
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    /// Column descriptors.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Get a column by id.
    pub fn column(&self, id: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// All rows in source order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// The configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Replace the rows (the data source delivered new data).
    ///
    /// Selected keys whose row is gone are dropped before the next render.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        let keys: HashSet<T::Key> = self.rows.iter().map(TableRow::key).collect();
        let dropped = self
            .state
            .update(|s| (true, s.selection.retain(|key| keys.contains(key))));
        if dropped > 0 {
            debug!("Dropped {} stale selected rows", dropped);
        }
        self.recompute();
    }

    /// Replace the column descriptors.
    ///
    /// A different schema (ids or order) resets the view state to defaults.
    pub fn set_columns(&mut self, columns: Vec<Column<T>>) {
        let changed = !same_schema(&self.columns, &columns);
        self.columns = columns;
        if changed {
            debug!("Column schema changed, resetting view state");
            self.reset_state();
        }
        self.recompute();
    }

    fn reset_state(&mut self) {
        let page_size = PageSize::new(self.config.page_size)
            .unwrap_or_else(|| PageSize::nearest(self.config.page_size));
        self.state.set(Self::fresh_state(&self.config, page_size));
    }

    // -------------------------------------------------------------------------
    // Filter
    // -------------------------------------------------------------------------

    /// Set the text filter of the designated column and go back to page 0.
    ///
    /// Empty text clears the filter.
    pub fn set_filter_text(&mut self, text: impl Into<String>) -> Result<(), ViewError> {
        let column = self.state.get().filter.column.clone();
        let Some(descriptor) = self.column(&column) else {
            return self.reject(ViewError::unknown_column(column));
        };
        if !descriptor.filterable {
            debug!("Column {} is not filterable", column);
            return Ok(());
        }

        let text = text.into();
        debug!("Filter {} = {:?}", column, text);
        self.state.update(|s| {
            let changed = s.filter.text != text || s.pagination.index != 0;
            s.filter.text = text;
            s.pagination.index = 0;
            (changed, ())
        });
        self.recompute();
        Ok(())
    }

    /// Bind the free-text filter to another column. Clears the filter text.
    pub fn set_filter_column(&mut self, column: &str) -> Result<(), ViewError> {
        match self.column(column) {
            None => return self.reject(ViewError::unknown_column(column)),
            Some(descriptor) if !descriptor.filterable => {
                return self.reject(ViewError::not_filterable(column));
            }
            Some(_) => {}
        }
        self.state.update(|s| {
            s.filter = FilterSpec::new(column);
            s.pagination.index = 0;
            (true, ())
        });
        self.recompute();
        Ok(())
    }

    /// Placeholder for the filter input, e.g. `Filter name....`.
    pub fn filter_placeholder(&self) -> String {
        format!("Filter {}....", self.state.get().filter.column)
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Header interaction on a column.
    ///
    /// Cycles the column through ascending, descending and unsorted. A
    /// [`SortGesture::Replace`] clears the other sort keys, a
    /// [`SortGesture::Additive`] keeps them. Non-sortable columns are left
    /// alone. Any change goes back to page 0.
    pub fn set_sort(&mut self, column: &str, gesture: SortGesture) -> Result<(), ViewError> {
        let Some(descriptor) = self.column(column) else {
            return self.reject(ViewError::unknown_column(column));
        };
        if !descriptor.sortable {
            debug!("Column {} is not sortable", column);
            return Ok(());
        }

        let direction = self.state.update(|s| {
            let direction = s.sort.toggle(column, gesture);
            s.pagination.index = 0;
            (true, direction)
        });
        debug!("Sort {} -> {:?} ({:?})", column, direction, gesture);
        self.recompute();
        Ok(())
    }

    /// Remove every sort key.
    pub fn clear_sort(&mut self) {
        self.state.update(|s| {
            let changed = !s.sort.is_empty();
            s.sort.clear();
            if changed {
                s.pagination.index = 0;
            }
            (changed, ())
        });
        self.recompute();
    }

    // -------------------------------------------------------------------------
    // Visibility
    // -------------------------------------------------------------------------

    /// Show or hide a column. Columns that are not hideable stay visible.
    pub fn toggle_column_visibility(&mut self, column: &str, visible: bool) -> Result<(), ViewError> {
        let Some(descriptor) = self.column(column) else {
            return self.reject(ViewError::unknown_column(column));
        };
        if !descriptor.hideable {
            debug!("Column {} is not hideable", column);
            return Ok(());
        }
        self.state.update(|s| (s.visibility.set(column, visible), ()));
        Ok(())
    }

    /// Whether a column is currently rendered.
    pub fn is_column_visible(&self, column: &str) -> bool {
        self.column(column)
            .is_some_and(|c| !c.hideable || self.state.get().visibility.is_visible(&c.id))
    }

    /// Columns that are rendered, in schema order.
    pub fn visible_columns(&self) -> Vec<&Column<T>> {
        self.columns
            .iter()
            .filter(|c| self.is_column_visible(&c.id))
            .collect()
    }

    /// Entries for the column visibility menu: every hideable column.
    pub fn hideable_columns(&self) -> Vec<ColumnToggle> {
        self.columns
            .iter()
            .filter(|c| c.hideable)
            .map(|c| ColumnToggle {
                id: c.id.clone(),
                header: c.header.clone(),
                visible: self.state.get().visibility.is_visible(&c.id),
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Change the page size, keeping the first visible row on screen.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), ViewError> {
        let page_size = Self::resolve_page_size(self.config.policy, size)?;
        let total = self.processed.len();
        self.state.update(|s| {
            let before = s.pagination;
            s.pagination.resize(page_size, total);
            (s.pagination != before, ())
        });
        debug!("Page size {}", page_size);
        Ok(())
    }

    /// Go to the next page. No-op on the last page.
    pub fn next_page(&mut self) {
        let total = self.processed.len();
        self.state.update(|s| {
            let can = s.pagination.can_next(total);
            if can {
                s.pagination.index += 1;
            }
            (can, ())
        });
    }

    /// Go to the previous page. No-op on the first page.
    pub fn previous_page(&mut self) {
        self.state.update(|s| {
            let can = s.pagination.can_previous();
            if can {
                s.pagination.index -= 1;
            }
            (can, ())
        });
    }

    /// Jump to a page, clamped into range.
    pub fn set_page_index(&mut self, index: usize) {
        let total = self.processed.len();
        self.state.update(|s| {
            let before = s.pagination.index;
            s.pagination.index = index;
            s.pagination.clamp(total);
            (s.pagination.index != before, ())
        });
    }

    /// Current zero-based page index.
    pub fn page_index(&self) -> usize {
        self.state.get().pagination.index
    }

    /// Current page size.
    pub fn page_size(&self) -> PageSize {
        self.state.get().pagination.size
    }

    /// Number of pages; zero when no row passes the filter.
    pub fn page_count(&self) -> usize {
        self.state.get().pagination.page_count(self.processed.len())
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Flip the selection of a row.
    ///
    /// Selection is independent of filtering and pagination: a selected row
    /// that is filtered out stays selected.
    pub fn toggle_row_selection(&mut self, key: &T::Key) -> Result<(), ViewError> {
        if !self.rows.iter().any(|row| &row.key() == key) {
            return self.reject(ViewError::unknown_row(key));
        }
        let changed = self.state.update(|s| {
            let changed = s.selection.toggle(key.clone());
            (changed, changed)
        });
        if changed {
            debug!("Toggled selection of row {}", key);
        }
        Ok(())
    }

    /// Select every row on the current page, or deselect them all if they
    /// already are.
    pub fn toggle_all_page_rows_selected(&mut self) {
        let keys: Vec<T::Key> = self.page_rows().map(TableRow::key).collect();
        self.state.update(|s| {
            let all_selected = !keys.is_empty() && keys.iter().all(|k| s.selection.is_selected(k));
            let changed = if all_selected {
                s.selection.deselect_all(&keys)
            } else {
                s.selection.select_all(keys.iter().cloned())
            };
            (changed > 0, ())
        });
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        self.state.update(|s| (s.selection.clear(), ()));
    }

    /// Whether a row is selected.
    pub fn is_selected(&self, key: &T::Key) -> bool {
        self.state.get().selection.is_selected(key)
    }

    /// Selected rows, in source order.
    pub fn selected_rows(&self) -> impl Iterator<Item = &T> {
        let selection = &self.state.get().selection;
        self.rows
            .iter()
            .filter(move |row| selection.is_selected(&row.key()))
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    /// Current view state.
    pub fn state(&self) -> &ViewState<T::Key> {
        self.state.get()
    }

    /// Reset the whole view state to its defaults.
    pub fn reset(&mut self) {
        self.reset_state();
        self.recompute();
    }

    /// Revision of the view. Bumps on every effective change.
    pub fn revision(&self) -> u64 {
        self.state.revision()
    }

    /// Whether the view changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    /// Mark the current revision as rendered.
    pub fn clear_dirty(&mut self) {
        self.state.clear_dirty();
    }

    // -------------------------------------------------------------------------
    // Derived rows
    // -------------------------------------------------------------------------

    /// Number of rows passing the filter.
    pub fn filtered_count(&self) -> usize {
        self.processed.len()
    }

    /// Filtered rows in sorted order, across all pages.
    pub fn filtered_rows(&self) -> impl Iterator<Item = &T> {
        self.processed.iter().map(|&i| &self.rows[i])
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> impl Iterator<Item = &T> {
        let range = self.state.get().pagination.page_range(self.processed.len());
        self.processed[range].iter().map(|&i| &self.rows[i])
    }

    /// Snapshot of everything the rendering layer needs.
    pub fn view(&self) -> TableView<'_, T> {
        let state = self.state.get();
        let total = self.processed.len();
        let columns = self.visible_columns();

        let headers = columns
            .iter()
            .map(|&column| HeaderCell {
                column,
                sort: state.sort.direction_of(&column.id),
                sort_position: if state.sort.keys().len() > 1 {
                    state.sort.position_of(&column.id)
                } else {
                    None
                },
            })
            .collect();

        let rows = self
            .page_rows()
            .map(|record| {
                let key = record.key();
                let cells = columns
                    .iter()
                    .map(|column| column.render(&record.value(&column.id), record))
                    .collect();
                ViewRow {
                    selected: state.selection.is_selected(&key),
                    key,
                    record,
                    cells,
                }
            })
            .collect();

        TableView {
            headers,
            rows,
            filter_column: state.filter.column.clone(),
            filter_text: state.filter.text.clone(),
            filtered_count: total,
            total_count: self.rows.len(),
            selected_count: self
                .filtered_rows()
                .filter(|row| state.selection.is_selected(&row.key()))
                .count(),
            total_selected: state.selection.len(),
            page_index: state.pagination.index,
            page_count: state.pagination.page_count(total),
            display_page_count: state.pagination.display_page_count(total),
            page_size: state.pagination.size,
            page_size_options: PageSize::OPTIONS,
            can_previous_page: state.pagination.can_previous(),
            can_next_page: state.pagination.can_next(total),
        }
    }

    /// Sort direction of a column, if sorted.
    pub fn sort_direction(&self, column: &str) -> Option<SortDirection> {
        self.state.get().sort.direction_of(column)
    }
}
