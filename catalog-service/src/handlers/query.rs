//! Paging parameter resolution
//!
//! Listing and search accept untrusted page/limit inputs. The policy here is
//! deliberate: malformed or out-of-range paging degrades to defaults instead
//! of rejecting the request. There is no error path. This is the opposite of
//! the column allow-list in [`crate::repository`], which is a hard
//! validation failure; the two policies are intentionally asymmetric.
//!
//! # Example
//!
//! ```rust
//! use catalog_service::handlers::{PageParams, PageQuery};
//!
//! let query = PageQuery {
//!     page: Some("2".to_string()),
//!     limit: Some("5".to_string()),
//! };
//! let params = query.resolve();
//! assert_eq!(params, PageParams { page: 2, limit: 5 });
//! assert_eq!(params.offset(), 5);
//!
//! // Garbage degrades to defaults, never errors
//! let query = PageQuery {
//!     page: Some("abc".to_string()),
//!     limit: Some("999".to_string()),
//! };
//! assert_eq!(query.resolve(), PageParams { page: 1, limit: 10 });
//! ```

use serde::Deserialize;

use crate::repository::Pagination;

/// Default number of items per page
pub const DEFAULT_LIMIT: u32 = 10;

/// Maximum allowed items per page
pub const MAX_LIMIT: u32 = 100;

/// Raw paging inputs from a query string
///
/// Both fields stay `Option<String>` so that non-numeric values reach the
/// resolver instead of failing deserialization with a client error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    /// Raw `page` parameter, if present
    pub page: Option<String>,

    /// Raw `limit` parameter, if present
    pub limit: Option<String>,
}

impl PageQuery {
    /// Resolve raw inputs into safe, bounded paging values
    ///
    /// Always succeeds: parse failures and out-of-range values fall back to
    /// `page = 1` and `limit = DEFAULT_LIMIT`.
    #[must_use]
    pub fn resolve(&self) -> PageParams {
        let page = self
            .page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1);

        let limit = self
            .limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|limit| (1..=MAX_LIMIT).contains(limit))
            .unwrap_or(DEFAULT_LIMIT);

        PageParams { page, limit }
    }
}

/// Normalized paging values
///
/// Invariants: `page >= 1` and `limit` in `[1, MAX_LIMIT]`, so the derived
/// offset is never negative and total-page division can never hit zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// Page number (1-indexed)
    pub page: u32,

    /// Items per page
    pub limit: u32,
}

impl PageParams {
    /// Normalize integer paging values already decoded from a request body
    ///
    /// Same policy as [`PageQuery::resolve`]: `page < 1` becomes 1, `limit`
    /// outside `[1, MAX_LIMIT]` becomes `DEFAULT_LIMIT`.
    #[must_use]
    pub fn clamp(page: i64, limit: i64) -> Self {
        let page = if (1..=i64::from(u32::MAX)).contains(&page) {
            page as u32
        } else {
            1
        };

        let limit = if (1..=i64::from(MAX_LIMIT)).contains(&limit) {
            limit as u32
        } else {
            DEFAULT_LIMIT
        };

        Self { page, limit }
    }

    /// Rows to skip: `(page - 1) * limit`
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    /// The store-level query window for these parameters
    #[must_use]
    pub fn window(&self) -> Pagination {
        Pagination::new(self.offset(), u64::from(self.limit))
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, limit: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn test_absent_params_resolve_to_defaults() {
        let params = query(None, None).resolve();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, DEFAULT_LIMIT);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_valid_params_pass_through() {
        let params = query(Some("3"), Some("25")).resolve();
        assert_eq!(params.page, 3);
        assert_eq!(params.limit, 25);
        assert_eq!(params.offset(), 50);
    }

    #[test]
    fn test_non_numeric_page_defaults_to_one() {
        for raw in ["abc", "1.5", "", " ", "2x", "--3"] {
            assert_eq!(query(Some(raw), None).resolve().page, 1, "page={raw:?}");
        }
    }

    #[test]
    fn test_page_below_one_defaults_to_one() {
        for raw in ["0", "-1", "-100"] {
            assert_eq!(query(Some(raw), None).resolve().page, 1, "page={raw:?}");
        }
    }

    #[test]
    fn test_non_numeric_limit_defaults() {
        for raw in ["abc", "ten", "", "1e2"] {
            assert_eq!(
                query(None, Some(raw)).resolve().limit,
                DEFAULT_LIMIT,
                "limit={raw:?}"
            );
        }
    }

    #[test]
    fn test_out_of_range_limit_defaults() {
        // Outside [1, 100] falls back to the default rather than clamping
        for raw in ["0", "-5", "101", "1000"] {
            assert_eq!(
                query(None, Some(raw)).resolve().limit,
                DEFAULT_LIMIT,
                "limit={raw:?}"
            );
        }
    }

    #[test]
    fn test_limit_boundaries_are_inclusive() {
        assert_eq!(query(None, Some("1")).resolve().limit, 1);
        assert_eq!(query(None, Some("100")).resolve().limit, 100);
    }

    #[test]
    fn test_offset_math() {
        for (page, limit, expected) in [(1, 10, 0), (2, 5, 5), (4, 25, 75), (100, 100, 9900)] {
            let params = PageParams { page, limit };
            assert_eq!(params.offset(), expected);
        }
    }

    #[test]
    fn test_clamp_applies_same_policy_to_integers() {
        assert_eq!(PageParams::clamp(2, 50), PageParams { page: 2, limit: 50 });
        assert_eq!(PageParams::clamp(0, 0), PageParams::default());
        assert_eq!(PageParams::clamp(-3, 101), PageParams::default());
        assert_eq!(
            PageParams::clamp(i64::MAX, i64::MIN),
            PageParams::default()
        );
    }

    #[test]
    fn test_window_carries_offset_and_limit() {
        let window = PageParams { page: 3, limit: 20 }.window();
        assert_eq!(window.offset, 40);
        assert_eq!(window.limit, 20);
    }
}
