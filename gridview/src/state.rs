//! View state and change tracking.

use std::hash::Hash;

use crate::filter::FilterSpec;
use crate::pagination::PageSize;
use crate::pagination::Pagination;
use crate::selection::Selection;
use crate::selection::SelectionMode;
use crate::sort::SortSpec;
use crate::visibility::Visibility;

/// Transient state describing how a dataset is currently displayed.
///
/// Owned exclusively by a [`TableController`](crate::TableController) and
/// mutated only through its operations.
#[derive(Debug, Clone)]
pub struct ViewState<K: Clone + Eq + Hash> {
    /// Active sort keys.
    pub sort: SortSpec,
    /// Text filter on the designated column.
    pub filter: FilterSpec,
    /// Column visibility.
    pub visibility: Visibility,
    /// Selected row keys.
    pub selection: Selection<K>,
    /// Page cursor.
    pub pagination: Pagination,
}

impl<K: Clone + Eq + Hash> ViewState<K> {
    /// Fresh state: no sort, empty filter, all columns visible, nothing
    /// selected, first page.
    pub fn new(filter_column: impl Into<String>, page_size: PageSize, mode: SelectionMode) -> Self {
        Self {
            sort: SortSpec::default(),
            filter: FilterSpec::new(filter_column),
            visibility: Visibility::default(),
            selection: Selection::new(mode),
            pagination: Pagination::new(page_size),
        }
    }
}

/// A value with a revision counter and a dirty flag.
///
/// Every effective update bumps the revision and raises the flag. The
/// rendering layer renders when the flag is up and then clears it, so a
/// render of revision `n` always happens before the transition to `n + 1`
/// is observed.
#[derive(Debug, Clone)]
pub struct Tracked<T> {
    value: T,
    revision: u64,
    dirty: bool,
}

impl<T> Tracked<T> {
    /// Wrap a value. Starts dirty so the first frame gets rendered.
    pub fn new(value: T) -> Self {
        Self {
            value,
            revision: 0,
            dirty: true,
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.touch();
    }

    /// Update the value in place. The closure reports whether anything changed;
    /// only changes bump the revision.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> (bool, R)) -> R {
        let (changed, result) = f(&mut self.value);
        if changed {
            self.touch();
        }
        result
    }

    /// Number of effective updates so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Check if the value changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after rendering.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.dirty = true;
    }
}
