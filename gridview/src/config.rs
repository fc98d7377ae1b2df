//! Table configuration

use serde::Deserialize;
use serde::Serialize;

use crate::filter::TextMatch;
use crate::selection::SelectionMode;

/// Column the free-text filter binds to when none is configured.
pub const DEFAULT_FILTER_COLUMN: &str = "name";

/// How operations treat invalid input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationPolicy {
    /// Clamp invalid page sizes to the nearest option and ignore unknown
    /// columns or rows. Logs a warning and returns `Ok`.
    #[default]
    Lenient,
    /// Reject invalid input with a [`ViewError`](crate::ViewError) and leave
    /// the view state untouched.
    Strict,
}

/// Configuration for a table controller.
///
/// Every field has a default, so partial JSON documents are accepted.
///
/// # Example
///
/// ```
/// use gridview::{OperationPolicy, TableConfig, TextMatch};
///
/// let config = TableConfig::from_json(r#"{ "filter_column": "email", "policy": "strict" }"#)?;
/// assert_eq!(config.filter_column, "email");
/// assert_eq!(config.page_size, 10);
/// assert_eq!(config.policy, OperationPolicy::Strict);
///
/// let config = TableConfig::default().with_text_match(TextMatch::CaseSensitive);
/// assert_eq!(config.text_match, TextMatch::CaseSensitive);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Column the free-text filter is bound to.
    ///
    /// Default: `"name"`
    pub filter_column: String,

    /// Initial rows per page. Must be one of 10, 20, 30, 40, 50; other values
    /// go through the operation policy when the controller is built.
    ///
    /// Default: 10
    pub page_size: usize,

    /// Case policy of the text filter.
    ///
    /// Default: case-insensitive
    pub text_match: TextMatch,

    /// Handling of invalid operations.
    ///
    /// Default: lenient
    pub policy: OperationPolicy,

    /// Row selection mode.
    ///
    /// Default: multi
    pub selection: SelectionMode,

    /// Maximum cell width used by the text renderer, in terminal columns.
    ///
    /// Default: 32
    pub max_cell_width: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            filter_column: DEFAULT_FILTER_COLUMN.to_string(),
            page_size: 10,
            text_match: TextMatch::default(),
            policy: OperationPolicy::default(),
            selection: SelectionMode::default(),
            max_cell_width: 32,
        }
    }
}

impl TableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sets the designated filter column.
    pub fn with_filter_column(mut self, column: impl Into<String>) -> Self {
        self.filter_column = column.into();
        self
    }

    /// Sets the initial page size.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Sets the filter case policy.
    pub fn with_text_match(mut self, text_match: TextMatch) -> Self {
        self.text_match = text_match;
        self
    }

    /// Sets the operation policy.
    pub fn with_policy(mut self, policy: OperationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use the strict operation policy.
    pub fn strict(self) -> Self {
        self.with_policy(OperationPolicy::Strict)
    }

    /// Sets the selection mode.
    pub fn with_selection(mut self, mode: SelectionMode) -> Self {
        self.selection = mode;
        self
    }

    /// Sets the renderer's maximum cell width.
    pub fn with_max_cell_width(mut self, width: usize) -> Self {
        self.max_cell_width = width;
        self
    }
}
