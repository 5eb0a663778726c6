//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Maximum items per page
pub const MAX_PER_PAGE: u32 = 100;

/// Minimum items per page
pub const MIN_PER_PAGE: u32 = 1;

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl Pagination {
    /// Create a new pagination with custom values
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(MIN_PER_PAGE, MAX_PER_PAGE),
        }
    }

    /// Number of items to skip
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.per_page as usize
    }

    /// Number of items to take
    pub fn limit(&self) -> usize {
        self.per_page as usize
    }

    /// Validate and sanitize pagination parameters
    pub fn validate(mut self) -> Self {
        self.page = self.page.max(1);
        self.per_page = self.per_page.clamp(MIN_PER_PAGE, MAX_PER_PAGE);
        self
    }
}

/// Paginated response wrapper with metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The actual data items
    pub data: Vec<T>,

    /// Current page number
    pub page: u32,

    /// Items per page
    pub per_page: u32,

    /// Total number of items
    pub total: u64,

    /// Total number of pages
    pub total_pages: u32,

    /// Whether there's a next page
    pub has_next: bool,

    /// Whether there's a previous page
    pub has_prev: bool,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(data: Vec<T>, pagination: Pagination, total: u64) -> Self {
        let total_pages = Self::calculate_total_pages(total, pagination.per_page);

        Self {
            data,
            page: pagination.page,
            per_page: pagination.per_page,
            total,
            total_pages,
            has_next: pagination.page < total_pages,
            has_prev: pagination.page > 1,
        }
    }

    /// Transform the items while keeping the page metadata
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PaginatedResponse<U> {
        PaginatedResponse {
            data: self.data.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_prev: self.has_prev,
        }
    }

    fn calculate_total_pages(total: u64, per_page: u32) -> u32 {
        if per_page == 0 {
            return 0;
        }
        total.div_ceil(per_page as u64) as u32
    }
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_new_clamps() {
        let pagination = Pagination::new(0, 500);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, MAX_PER_PAGE);
    }

    #[test]
    fn test_pagination_offset() {
        let pagination = Pagination::new(3, 10);
        assert_eq!(pagination.offset(), 20);
        assert_eq!(pagination.limit(), 10);
    }

    #[test]
    fn test_paginated_response_metadata() {
        let response = PaginatedResponse::new(vec![1, 2], Pagination::new(2, 2), 5);
        assert_eq!(response.total_pages, 3);
        assert!(response.has_next);
        assert!(response.has_prev);

        let last = PaginatedResponse::new(vec![5], Pagination::new(3, 2), 5);
        assert!(!last.has_next);
    }

    #[test]
    fn test_paginated_response_map() {
        let response = PaginatedResponse::new(vec![1, 2], Pagination::default(), 2);
        let mapped = response.map(|n| n * 10);
        assert_eq!(mapped.data, vec![10, 20]);
        assert_eq!(mapped.total, 2);
    }

    #[test]
    fn test_pagination_deserialize_defaults() {
        let pagination: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(pagination, Pagination::default());
    }
}
