//! Pagination cursor and page sizes.

use std::fmt;
use std::ops::Range;

use crate::error::ViewError;

/// Number of rows per page. Always one of [`PageSize::OPTIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageSize(usize);

impl PageSize {
    /// The page sizes offered by the "Rows per page" selector.
    pub const OPTIONS: [PageSize; 5] = [
        PageSize(10),
        PageSize(20),
        PageSize(30),
        PageSize(40),
        PageSize(50),
    ];

    /// Default page size.
    pub const DEFAULT: PageSize = PageSize(10);

    /// Returns the page size if `size` is one of the options.
    pub fn new(size: usize) -> Option<Self> {
        Self::OPTIONS.into_iter().find(|option| option.0 == size)
    }

    /// Clamp any size to the nearest option. Ties resolve to the smaller option.
    pub fn nearest(size: usize) -> Self {
        let mut best = Self::OPTIONS[0];
        for option in Self::OPTIONS {
            if option.0.abs_diff(size) < best.0.abs_diff(size) {
                best = option;
            }
        }
        best
    }

    /// Number of rows.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for PageSize {
    type Error = ViewError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size).ok_or(ViewError::InvalidPageSize { requested: size })
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pagination cursor: current page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    /// Zero-based page index.
    pub index: usize,
    /// Rows per page.
    pub size: PageSize,
}

impl Pagination {
    /// Create a cursor on the first page.
    pub fn new(size: PageSize) -> Self {
        Self { index: 0, size }
    }

    /// Number of pages for `total` rows. Zero when there are no rows.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.size.get())
    }

    /// Number of pages to show to the user; never less than one.
    pub fn display_page_count(&self, total: usize) -> usize {
        self.page_count(total).max(1)
    }

    /// Index of the first row on the current page.
    pub fn first_row(&self) -> usize {
        self.index * self.size.get()
    }

    /// Row bounds of the current page within `total` rows.
    pub fn page_range(&self, total: usize) -> Range<usize> {
        let start = self.first_row().min(total);
        let end = (start + self.size.get()).min(total);
        start..end
    }

    /// Whether a previous page exists.
    pub fn can_previous(&self) -> bool {
        self.index > 0
    }

    /// Whether a next page exists.
    pub fn can_next(&self, total: usize) -> bool {
        self.index + 1 < self.page_count(total)
    }

    /// Clamp the index into `0..display_page_count(total)`.
    /// Returns `true` if the index moved.
    pub fn clamp(&mut self, total: usize) -> bool {
        let max_index = self.display_page_count(total) - 1;
        if self.index > max_index {
            self.index = max_index;
            true
        } else {
            false
        }
    }

    /// Change the page size, keeping the previously first visible row on screen.
    pub fn resize(&mut self, size: PageSize, total: usize) {
        let first = self.first_row();
        self.size = size;
        self.index = first / size.get();
        self.clamp(total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_clamps_and_rounds() {
        assert_eq!(PageSize::nearest(0).get(), 10);
        assert_eq!(PageSize::nearest(14).get(), 10);
        assert_eq!(PageSize::nearest(15).get(), 10);
        assert_eq!(PageSize::nearest(16).get(), 20);
        assert_eq!(PageSize::nearest(1000).get(), 50);
    }

    #[test]
    fn test_page_count() {
        let p = Pagination::new(PageSize::DEFAULT);
        assert_eq!(p.page_count(0), 0);
        assert_eq!(p.display_page_count(0), 1);
        assert_eq!(p.page_count(25), 3);
        assert_eq!(p.page_count(30), 3);
    }

    #[test]
    fn test_resize_keeps_first_row() {
        let mut p = Pagination::new(PageSize::DEFAULT);
        p.index = 4; // rows 40..50
        p.resize(PageSize::new(20).unwrap(), 100);
        assert_eq!(p.index, 2); // rows 40..60
        p.resize(PageSize::new(30).unwrap(), 100);
        assert_eq!(p.index, 1); // rows 30..60 still shows row 40
    }

    #[test]
    fn test_clamp() {
        let mut p = Pagination::new(PageSize::DEFAULT);
        p.index = 9;
        assert!(p.clamp(25));
        assert_eq!(p.index, 2);
        assert!(p.clamp(0));
        assert_eq!(p.index, 0);
        assert!(!p.clamp(0));
    }

    #[test]
    fn test_try_from_rejects_unknown_sizes() {
        assert_eq!(
            PageSize::try_from(25),
            Err(ViewError::InvalidPageSize { requested: 25 })
        );
        assert_eq!(PageSize::try_from(40).map(PageSize::get), Ok(40));
    }
}
