// crates/countrydb-core/src/pagination.rs

//! Page slicing and the numbered page-button window.

use serde::Serialize;
use std::ops::Range;

/// Items shown per page.
pub const ITEMS_PER_PAGE: usize = 12;

/// Maximum number of numbered buttons in a [`PageWindow`].
pub const WINDOW_SIZE: usize = 5;

/// Number of pages for `count` items; at least one, even when empty.
pub fn total_pages(count: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    count.div_ceil(per_page).max(1)
}

/// Index range of `page` (1-based), clipped to `count`. Empty past the end.
pub fn page_range(page: usize, per_page: usize, count: usize) -> Range<usize> {
    let per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page).min(count);
    let end = start.saturating_add(per_page).min(count);
    start..end
}

/// The items of `page` (1-based).
pub fn visible_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    &items[page_range(page, per_page, items.len())]
}

/// The numbered page buttons to show, plus an optional trailing
/// "… last" shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// Contiguous page numbers, at most [`WINDOW_SIZE`].
    pub buttons: Vec<usize>,
    /// Present when an ellipsis and a button for the last page follow.
    /// It can repeat the last entry of `buttons`; callers render it as is.
    pub last_page: Option<usize>,
}

impl PageWindow {
    /// Compute the window for `current` of `total` pages.
    ///
    /// ```rust
    /// use countrydb_core::pagination::PageWindow;
    ///
    /// let w = PageWindow::compute(7, 20);
    /// assert_eq!(w.buttons, vec![5, 6, 7, 8, 9]);
    /// assert_eq!(w.last_page, Some(20));
    ///
    /// let w = PageWindow::compute(19, 20);
    /// assert_eq!(w.buttons, vec![16, 17, 18, 19, 20]);
    /// assert_eq!(w.last_page, None);
    /// ```
    pub fn compute(current: usize, total: usize) -> Self {
        let total = total.max(1);
        let first = if total <= WINDOW_SIZE || current <= 3 {
            1
        } else if current >= total - 2 {
            total - (WINDOW_SIZE - 1)
        } else {
            current - 2
        };
        let len = total.min(WINDOW_SIZE);
        let buttons = (first..first + len).collect();

        let last_page = (total > WINDOW_SIZE && current < total - 2).then_some(total);

        Self { buttons, last_page }
    }

    pub fn contains(&self, page: usize) -> bool {
        self.buttons.contains(&page) || self.last_page == Some(page)
    }
}

/// Current page plus page size. The only transitions are a reset to page 1
/// and clamped navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl PageState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Jump to `page`, clamped to `[1, total]`.
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.current_page = page.clamp(1, total.max(1));
    }

    /// Advance one page. No-op on the last page.
    pub fn next(&mut self, total: usize) {
        if self.has_next(total) {
            self.go_to(self.current_page + 1, total);
        }
    }

    /// Go back one page. No-op on the first page.
    pub fn prev(&mut self, total: usize) {
        if self.has_prev() {
            self.go_to(self.current_page - 1, total);
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.current_page < total
    }

    pub fn range(&self, count: usize) -> Range<usize> {
        page_range(self.current_page, self.items_per_page, count)
    }

    pub fn window(&self, total: usize) -> PageWindow {
        PageWindow::compute(self.current_page, total)
    }
}
