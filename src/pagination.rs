//! Client-side paging of the visible subset. Paging only chunks the table;
//! it never changes what is filtered or aggregated.

use serde::Serialize;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    page: usize,
    per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: config::DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.clamp(1, config::MAX_PAGE_SIZE),
        }
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Change the page size and return to the first page.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.clamp(1, config::MAX_PAGE_SIZE);
        self.page = 1;
    }

    /// Move to `page`, clamped to the pages available for `total` rows.
    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, self.total_pages(total));
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Number of pages for `total` rows; an empty table still has one page.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.per_page).max(1)
    }

    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }

    /// The rows of the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = (start + self.per_page).min(items.len());
        &items[start..end]
    }
}
