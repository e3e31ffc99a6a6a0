//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Pagination query parameters, reusable across all list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }

    /// Calculate the offset into the full result set
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)) * self.limit()
    }

    /// Get limit capped at maximum
    pub fn limit(&self) -> u64 {
        self.per_page.min(MAX_PAGE_SIZE)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper: the `{data, meta}` envelope of list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Create new paginated response
    pub fn new(data: Vec<T>, page: u64, per_page: u64, total: u64) -> Self {
        let total_pages = if per_page > 0 {
            (total + per_page - 1) / per_page
        } else {
            0
        };

        Self {
            data,
            meta: PaginationMeta {
                page,
                per_page,
                total,
                total_pages,
            },
        }
    }

    /// Slice the current page out of a full in-memory result set
    pub fn from_all(all: Vec<T>, params: &PaginationParams) -> Self {
        let total = all.len() as u64;
        let data = all
            .into_iter()
            .skip(params.offset() as usize)
            .take(params.limit() as usize)
            .collect();

        Self::new(data, params.page, params.limit(), total)
    }

    /// Derive the page control state for this envelope
    pub fn page_control(&self) -> PageControl {
        PageControl::from_meta(&self.meta)
    }
}

/// What a pagination widget renders: the page label and whether the
/// previous/next actions are enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    pub page: u64,
    pub total_pages: u64,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageControl {
    pub fn from_meta(meta: &PaginationMeta) -> Self {
        // An empty result set still renders as page 1 of 1
        let total_pages = meta.total_pages.max(1);
        Self {
            page: meta.page,
            total_pages,
            has_prev: meta.page > 1,
            has_next: meta.page < total_pages,
        }
    }

    /// The label shown between the previous/next actions
    pub fn label(&self) -> String {
        format!("Trang {} / {}", self.page, self.total_pages)
    }
}
