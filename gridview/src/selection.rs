//! Row selection set.

use std::collections::HashSet;
use std::hash::Hash;

use serde::Deserialize;
use serde::Serialize;

/// Selection mode for table rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// No selection allowed.
    None,
    /// Single row selection (radio-button style).
    Single,
    /// Multiple rows can be selected (checkbox style).
    #[default]
    Multi,
}

/// Tracks selected rows by their keys.
///
/// Selection is keyed, not positional, so it survives sorting, filtering
/// and pagination unchanged.
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + Hash> {
    mode: SelectionMode,
    selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::new(SelectionMode::default())
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    /// Create an empty selection with the given mode.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: HashSet::new(),
        }
    }

    /// The selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Toggle selection for a key. Returns true if selection changed.
    pub fn toggle(&mut self, key: K) -> bool {
        match self.mode {
            SelectionMode::None => false,
            SelectionMode::Single => {
                if self.selected.contains(&key) {
                    self.selected.clear();
                } else {
                    self.selected.clear();
                    self.selected.insert(key);
                }
                true
            }
            SelectionMode::Multi => {
                if !self.selected.remove(&key) {
                    self.selected.insert(key);
                }
                true
            }
        }
    }

    /// Select every key (multi mode only). Returns the number newly selected.
    pub fn select_all(&mut self, keys: impl IntoIterator<Item = K>) -> usize {
        if self.mode != SelectionMode::Multi {
            return 0;
        }
        keys.into_iter()
            .filter(|key| self.selected.insert(key.clone()))
            .count()
    }

    /// Deselect every given key. Returns the number removed.
    pub fn deselect_all<'a>(&mut self, keys: impl IntoIterator<Item = &'a K>) -> usize
    where
        K: 'a,
    {
        keys.into_iter()
            .filter(|key| self.selected.remove(*key))
            .count()
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Keep only keys for which `keep` returns true. Returns the number dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) -> usize {
        let before = self.selected.len();
        self.selected.retain(|key| keep(key));
        before - self.selected.len()
    }

    /// Clear all selections. Returns true if anything was selected.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.selected.is_empty();
        self.selected.clear();
        had_any
    }

    /// Number of selected keys.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// All selected keys, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.selected.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_toggle() {
        let mut selection = Selection::new(SelectionMode::Multi);
        assert!(selection.toggle(1));
        assert!(selection.toggle(3));
        assert!(selection.is_selected(&1) && selection.is_selected(&3));
        selection.toggle(1);
        assert!(!selection.is_selected(&1));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_single_replaces() {
        let mut selection = Selection::new(SelectionMode::Single);
        selection.toggle("a");
        selection.toggle("b");
        assert!(!selection.is_selected(&"a"));
        assert!(selection.is_selected(&"b"));
        assert_eq!(selection.select_all(["c", "d"]), 0);
    }

    #[test]
    fn test_none_ignores_toggles() {
        let mut selection = Selection::new(SelectionMode::None);
        assert!(!selection.toggle(1));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_retain_reports_dropped() {
        let mut selection = Selection::new(SelectionMode::Multi);
        selection.select_all([1, 2, 3, 4]);
        assert_eq!(selection.retain(|k| k % 2 == 0), 2);
        assert_eq!(selection.len(), 2);
    }
}
