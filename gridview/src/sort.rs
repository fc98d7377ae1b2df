//! Sort specification and the stable multi-key sort.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::row::TableRow;
use crate::value::CellValue;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9).
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

impl SortDirection {
    /// Next state of the header click cycle: none → asc → desc → none.
    pub fn cycle(current: Option<SortDirection>) -> Option<SortDirection> {
        match current {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction: {}", other)),
        }
    }
}

/// How a header interaction combines with the existing sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortGesture {
    /// Plain click: cycle this column, drop every other sort key.
    #[default]
    Replace,
    /// Modifier click: cycle this column in place, keep the other keys.
    Additive,
}

/// One sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    /// Column id.
    pub column: String,
    /// Direction.
    pub direction: SortDirection,
}

/// Ordered sort keys. Empty means source order.
///
/// # Example
///
/// ```
/// use gridview::{SortDirection, SortSpec};
///
/// let spec = SortSpec::desc("total").then_asc("name");
/// assert_eq!(spec.direction_of("name"), Some(SortDirection::Ascending));
/// assert_eq!(spec.position_of("name"), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    /// Sort ascending on a column.
    pub fn asc(column: impl Into<String>) -> Self {
        Self::default().then_asc(column)
    }

    /// Sort descending on a column.
    pub fn desc(column: impl Into<String>) -> Self {
        Self::default().then_desc(column)
    }

    /// Add a secondary ascending key.
    pub fn then_asc(mut self, column: impl Into<String>) -> Self {
        self.keys.push(SortKey {
            column: column.into(),
            direction: SortDirection::Ascending,
        });
        self
    }

    /// Add a secondary descending key.
    pub fn then_desc(mut self, column: impl Into<String>) -> Self {
        self.keys.push(SortKey {
            column: column.into(),
            direction: SortDirection::Descending,
        });
        self
    }

    /// The sort keys in priority order.
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Returns `true` if no sort is active.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Direction for a column, if it is sorted.
    pub fn direction_of(&self, column: &str) -> Option<SortDirection> {
        self.keys
            .iter()
            .find(|key| key.column == column)
            .map(|key| key.direction)
    }

    /// Priority of a column among the sort keys.
    pub fn position_of(&self, column: &str) -> Option<usize> {
        self.keys.iter().position(|key| key.column == column)
    }

    /// Apply a header interaction. Returns the column's new direction.
    pub fn toggle(&mut self, column: &str, gesture: SortGesture) -> Option<SortDirection> {
        let next = SortDirection::cycle(self.direction_of(column));
        match gesture {
            SortGesture::Replace => {
                self.keys.clear();
                if let Some(direction) = next {
                    self.keys.push(SortKey {
                        column: column.to_string(),
                        direction,
                    });
                }
            }
            SortGesture::Additive => match (self.position_of(column), next) {
                (Some(pos), Some(direction)) => self.keys[pos].direction = direction,
                (Some(pos), None) => {
                    self.keys.remove(pos);
                }
                (None, Some(direction)) => self.keys.push(SortKey {
                    column: column.to_string(),
                    direction,
                }),
                (None, None) => {}
            },
        }
        next
    }

    /// Remove all sort keys.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

/// Stable sort of row indices by the sort spec.
///
/// Rows comparing equal on every key keep the order they have in `indices`.
pub fn sort_indices<T: TableRow>(rows: &[T], indices: &mut Vec<usize>, spec: &SortSpec) {
    if spec.is_empty() || indices.len() < 2 {
        return;
    }

    // Extract every sort value once instead of per comparison.
    let mut decorated: Vec<(usize, Vec<CellValue>)> = indices
        .iter()
        .map(|&i| {
            let values = spec
                .keys
                .iter()
                .map(|key| rows[i].value(&key.column))
                .collect();
            (i, values)
        })
        .collect();

    decorated.sort_by(|(_, a), (_, b)| {
        spec.keys
            .iter()
            .zip(a.iter().zip(b))
            .map(|(key, (x, y))| key.direction.apply(x.compare(y)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });

    *indices = decorated.into_iter().map(|(i, _)| i).collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_cycles_through_three_states() {
        let mut spec = SortSpec::default();
        assert_eq!(
            spec.toggle("name", SortGesture::Replace),
            Some(SortDirection::Ascending)
        );
        assert_eq!(
            spec.toggle("name", SortGesture::Replace),
            Some(SortDirection::Descending)
        );
        assert_eq!(spec.toggle("name", SortGesture::Replace), None);
        assert!(spec.is_empty());
    }

    #[test]
    fn test_replace_drops_other_keys() {
        let mut spec = SortSpec::asc("name").then_desc("price");
        spec.toggle("stock", SortGesture::Replace);
        assert_eq!(spec, SortSpec::asc("stock"));
    }

    #[test]
    fn test_replace_on_secondary_key_continues_its_cycle() {
        let mut spec = SortSpec::asc("name").then_asc("price");
        spec.toggle("price", SortGesture::Replace);
        assert_eq!(spec, SortSpec::desc("price"));
    }

    #[test]
    fn test_additive_appends_updates_and_removes() {
        let mut spec = SortSpec::asc("name");
        spec.toggle("price", SortGesture::Additive);
        assert_eq!(spec, SortSpec::asc("name").then_asc("price"));
        spec.toggle("name", SortGesture::Additive);
        assert_eq!(spec, SortSpec::desc("name").then_asc("price"));
        spec.toggle("name", SortGesture::Additive);
        assert_eq!(spec, SortSpec::asc("price"));
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Descending));
        assert!("sideways".parse::<SortDirection>().is_err());
    }
}
