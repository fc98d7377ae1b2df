//! Tabular view controller
//!
//! Sorting, free-text filtering, column visibility, row selection and
//! pagination over an in-memory dataset, plus a plain-text renderer for the
//! resulting view.

pub mod column;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod render;
pub mod row;
pub mod selection;
pub mod sort;
pub mod state;
pub mod value;
pub mod view;
pub mod visibility;

pub use column::{CellRenderer, Column};
pub use config::{DEFAULT_FILTER_COLUMN, OperationPolicy, TableConfig};
pub use controller::TableController;
pub use error::ViewError;
pub use filter::{FilterSpec, TextMatch};
pub use pagination::{PageSize, Pagination};
pub use render::render_table;
pub use row::{JsonKey, JsonRow, TableRow};
pub use selection::{Selection, SelectionMode};
pub use sort::{SortDirection, SortGesture, SortKey, SortSpec, sort_indices};
pub use state::{Tracked, ViewState};
pub use value::CellValue;
pub use view::{ColumnToggle, HeaderCell, TableView, ViewRow};
pub use visibility::Visibility;
