//! Column visibility set.

use std::collections::HashMap;

/// Visibility per column id. Columns without an entry are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visibility {
    entries: HashMap<String, bool>,
}

impl Visibility {
    /// Whether the column is visible.
    pub fn is_visible(&self, column: &str) -> bool {
        self.entries.get(column).copied().unwrap_or(true)
    }

    /// Set a column's visibility. Returns true if it changed.
    pub fn set(&mut self, column: &str, visible: bool) -> bool {
        let changed = self.is_visible(column) != visible;
        self.entries.insert(column.to_string(), visible);
        changed
    }
}
