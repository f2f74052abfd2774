//! Response envelope for paginated catalog results
//!
//! Pure assembly: rows plus the *normalized* paging values plus the full
//! matching-row count, with `total_pages` derived here so it always reflects
//! the limit that was actually applied, never the raw input.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::query::PageParams;
use crate::models::Product;

/// One page of catalog results with paging metadata
///
/// # Example
///
/// ```rust
/// use catalog_service::handlers::{PageParams, ProductPage};
///
/// let page = ProductPage::new(vec![], PageParams { page: 1, limit: 10 }, 95);
/// assert_eq!(page.total_pages, 10);
/// assert_eq!(page.count, 95);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    /// Rows for this page, ascending id order
    pub products: Vec<Product>,

    /// Page number (1-indexed, normalized)
    pub page: u32,

    /// Items per page (normalized)
    pub limit: u32,

    /// Total number of pages: `ceil(count / limit)`
    pub total_pages: u32,

    /// Full matching-row count, independent of page size
    pub count: u64,
}

impl ProductPage {
    /// Assemble a page from rows, normalized paging values, and total count
    ///
    /// Deterministic and side-effect free. `limit >= 1` is guaranteed by the
    /// resolver, so the division cannot hit zero.
    #[must_use]
    pub fn new(products: Vec<Product>, params: PageParams, count: u64) -> Self {
        Self {
            products,
            page: params.page,
            limit: params.limit,
            total_pages: total_pages(count, params.limit),
            count,
        }
    }
}

impl IntoResponse for ProductPage {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Calculate total pages, rounding up
fn total_pages(count: u64, limit: u32) -> u32 {
    let limit = u64::from(limit);
    // Ceiling division: (count + limit - 1) / limit
    let pages = count.saturating_add(limit).saturating_sub(1) / limit;
    pages.min(u64::from(u32::MAX)) as u32
}
