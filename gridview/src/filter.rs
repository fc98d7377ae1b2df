//! Free-text filter on the designated column.
//!
//! Matching is a substring test on the stringified raw cell value (not the
//! custom-rendered text). By default the test is case-insensitive: both sides
//! are lowercased with Unicode rules before `str::contains`.

use serde::Deserialize;
use serde::Serialize;

use crate::row::TableRow;
use crate::value::CellValue;

/// Case policy of the text filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMatch {
    /// Lowercase both sides before matching.
    #[default]
    CaseInsensitive,
    /// Plain `str::contains`.
    CaseSensitive,
}

impl TextMatch {
    /// Returns `true` if `haystack` contains `needle` under this policy.
    pub fn contains(self, haystack: &str, needle: &str) -> bool {
        match self {
            TextMatch::CaseSensitive => haystack.contains(needle),
            TextMatch::CaseInsensitive => haystack.to_lowercase().contains(&needle.to_lowercase()),
        }
    }
}

/// The active text filter, bound to a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    /// Designated filter column.
    pub column: String,
    /// Filter text. Empty means no filtering.
    pub text: String,
}

impl FilterSpec {
    /// Create an empty filter on a column.
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            text: String::new(),
        }
    }

    /// Returns `true` if the filter restricts rows.
    pub fn is_active(&self) -> bool {
        !self.text.is_empty()
    }

    /// Test a single cell value.
    pub fn matches(&self, value: &CellValue, mode: TextMatch) -> bool {
        !self.is_active() || mode.contains(&value.to_string(), &self.text)
    }

    /// Indices of the rows passing the filter, in source order.
    pub fn apply<T: TableRow>(&self, rows: &[T], mode: TextMatch) -> Vec<usize> {
        if !self.is_active() {
            return (0..rows.len()).collect();
        }
        // Lowercase the needle once, not per row.
        let needle = match mode {
            TextMatch::CaseSensitive => self.text.clone(),
            TextMatch::CaseInsensitive => self.text.to_lowercase(),
        };
        rows.iter()
            .enumerate()
            .filter(|(_, row)| {
                let text = row.value(&self.column).to_string();
                match mode {
                    TextMatch::CaseSensitive => text.contains(&needle),
                    TextMatch::CaseInsensitive => text.to_lowercase().contains(&needle),
                }
            })
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_policies() {
        assert!(TextMatch::CaseInsensitive.contains("Wireless Mouse", "mouse"));
        assert!(!TextMatch::CaseSensitive.contains("Wireless Mouse", "mouse"));
        assert!(TextMatch::CaseSensitive.contains("Wireless Mouse", "Mouse"));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = FilterSpec::new("name");
        assert!(filter.matches(&CellValue::Null, TextMatch::CaseSensitive));
    }

    #[test]
    fn test_numbers_match_on_their_text() {
        let filter = FilterSpec {
            column: "qty".into(),
            text: "12".into(),
        };
        assert!(filter.matches(&CellValue::Int(3125), TextMatch::CaseSensitive));
        assert!(!filter.matches(&CellValue::Int(21), TextMatch::CaseSensitive));
    }
}
