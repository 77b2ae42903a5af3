//! Gallery query parameters and pagination utilities

use crate::core::filter::CategoryFilter;
use serde::{Deserialize, Serialize};

/// Query parameters for the stateless artwork listing
///
/// # Example
/// ```text
/// GET /artworks?q=neon
/// GET /artworks?category=Photography&page=1&limit=10
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GalleryParams {
    /// Free-text query matched against title, tags and medium
    pub q: Option<String>,

    /// Exact category, or "All"
    pub category: Option<String>,

    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Number of items per page
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    20
}

impl GalleryParams {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
            .as_deref()
            .map(CategoryFilter::from)
            .unwrap_or_default()
    }

    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get limit, clamped to 1..=100
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, 100)
    }
}

/// Paginated response structure
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    /// Slice `items` down to the requested page
    pub fn paginate(items: Vec<T>, page: usize, limit: usize) -> Self {
        let pagination = PaginationMeta::new(page, limit, items.len());
        let data = items
            .into_iter()
            .skip((pagination.page - 1) * pagination.limit)
            .take(pagination.limit)
            .collect();
        Self { data, pagination }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: usize,
    pub limit: usize,
    /// Total number of items (after filters)
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let page = page.max(1);
        let limit = limit.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };
        let start = (page - 1) * limit;

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start + limit < total,
            has_prev: page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_params_defaults() {
        let params: GalleryParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 20);
        assert_eq!(params.query(), "");
        assert_eq!(params.category(), CategoryFilter::All);
    }

    #[test]
    fn test_named_category() {
        let params = GalleryParams {
            category: Some("Sketch".to_string()),
            ..Default::default()
        };
        assert_eq!(params.category(), CategoryFilter::Named("Sketch".to_string()));
    }

    #[test]
    fn test_pagination_meta() {
        let meta = PaginationMeta::new(1, 20, 145);
        assert_eq!(meta.total_pages, 8);
        assert!(!meta.has_prev);
        assert!(meta.has_next);
    }

    #[test]
    fn test_paginate_slices_items() {
        let page = PaginatedResponse::paginate(vec![1, 2, 3, 4, 5], 2, 2);
        assert_eq!(page.data, vec![3, 4]);
        assert!(page.pagination.has_prev);
        assert!(page.pagination.has_next);

        let last = PaginatedResponse::paginate(vec![1, 2, 3], 9, 2);
        assert!(last.data.is_empty());
    }
}
