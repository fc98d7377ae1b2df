//! Error types

/// Invalid operations on a table view.
///
/// Only surfaced under [`OperationPolicy::Strict`](crate::OperationPolicy::Strict);
/// the lenient policy logs these and carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// Page size outside the enumerated options.
    #[error("invalid page size {requested}; expected one of 10, 20, 30, 40, 50")]
    InvalidPageSize {
        /// The rejected size.
        requested: usize,
    },

    /// Column id absent from the current descriptors.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// Filter target whose descriptor is not filterable.
    #[error("column is not filterable: {0}")]
    ColumnNotFilterable(String),

    /// Row key absent from the current data source.
    #[error("unknown row: {0}")]
    UnknownRow(String),
}

impl ViewError {
    /// Creates an unknown column error.
    pub fn unknown_column(id: impl Into<String>) -> Self {
        Self::UnknownColumn(id.into())
    }

    /// Creates a not filterable error.
    pub fn not_filterable(id: impl Into<String>) -> Self {
        Self::ColumnNotFilterable(id.into())
    }

    /// Creates an unknown row error.
    pub fn unknown_row(key: impl ToString) -> Self {
        Self::UnknownRow(key.to_string())
    }
}
