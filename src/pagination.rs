//! Offset-based pagination primitives.

use serde::Serialize;

/// Items shown per listing page unless configured otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;

/// One-based page request applied after filtering and sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// Row offset for the requested page. Page numbers below one clamp to
    /// the first page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1) * self.per_page
    }
}

/// A page of results together with the pre-pagination match count, so
/// callers can compute page counts without a second query.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub pages: usize,
    pub total: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, per_page: usize, total: usize) -> Self {
        Self {
            items,
            page,
            pages: total.div_ceil(per_page.max(1)),
            total,
        }
    }

    /// An empty page, used when the store is unavailable and the caller
    /// degrades instead of failing.
    pub fn empty(page: usize) -> Self {
        Self {
            items: Vec::new(),
            page,
            pages: 0,
            total: 0,
        }
    }
}
