//! Column descriptors.

use std::fmt;
use std::sync::Arc;

use crate::value::CellValue;

/// Custom cell rendering rule: receives the raw cell value and the whole row.
pub type CellRenderer<T> = Arc<dyn Fn(&CellValue, &T) -> String + Send + Sync>;

/// A table column definition.
///
/// Columns describe one renderable field of a row record. Every flag
/// defaults to `true`; opt out with the builder methods.
///
/// # Examples
///
/// ```
/// use gridview::{CellValue, Column, JsonRow};
///
/// let columns: Vec<Column<JsonRow>> = vec![
///     Column::new("select", "").not_sortable().not_filterable().not_hideable(),
///     Column::new("name", "Name"),
///     Column::new("price", "Price").render_with(|value, _row| match value {
///         CellValue::Float(p) => format!("${:.2}", p),
///         other => other.to_string(),
///     }),
/// ];
/// assert_eq!(columns[2].render(&CellValue::Float(3.5), &JsonRow::default()), "$3.50");
/// ```
pub struct Column<T> {
    /// Unique identifier, also the key used to extract cell values.
    pub id: String,
    /// Header text.
    pub header: String,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
    /// Whether the free-text filter may be bound to this column.
    pub filterable: bool,
    /// Whether this column appears in the visibility menu.
    pub hideable: bool,
    renderer: Option<CellRenderer<T>>,
}

impl<T> Column<T> {
    /// Create a new column with the given id and header.
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            sortable: true,
            filterable: true,
            hideable: true,
            renderer: None,
        }
    }

    /// Disable sorting on this column.
    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Disable filtering on this column.
    pub fn not_filterable(mut self) -> Self {
        self.filterable = false;
        self
    }

    /// Keep this column visible at all times.
    pub fn not_hideable(mut self) -> Self {
        self.hideable = false;
        self
    }

    /// Use a custom renderer for this column's cells.
    pub fn render_with<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&CellValue, &T) -> String + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Render a cell of this column.
    ///
    /// Falls back to the value's default stringification.
    pub fn render(&self, value: &CellValue, row: &T) -> String {
        match &self.renderer {
            Some(renderer) => renderer(value, row),
            None => value.to_string(),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            sortable: self.sortable,
            filterable: self.filterable,
            hideable: self.hideable,
            renderer: self.renderer.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("hideable", &self.hideable)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

/// Returns `true` if both schemas have the same column ids in the same order.
pub(crate) fn same_schema<T>(a: &[Column<T>], b: &[Column<T>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.id == y.id)
}
