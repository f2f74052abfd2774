//! Catalog query construction and store access
//!
//! This module owns the two query modes (full listing and column-scoped
//! substring search) and the rules that keep them safe:
//!
//! - **Allow-list**: [`SearchColumn`] is a closed enumeration of the five
//!   searchable columns; parsing it is the membership test and nothing else
//!   ever reaches query text.
//! - **Static templates**: every SQL statement is a compile-time constant
//!   selected by `match`; keywords and window bounds travel as bind
//!   parameters.
//! - **Store seam**: [`CatalogStore`] abstracts execution so handlers can be
//!   exercised without a database.
//!
//! # Example
//!
//! ```rust
//! use catalog_service::repository::{Pagination, SearchColumn};
//!
//! let column: SearchColumn = "brand".parse().unwrap();
//! let window = Pagination::page(2, 10);
//! assert_eq!(window.offset, 10);
//! assert_eq!(column.as_str(), "brand");
//! ```

mod column;
mod error;
mod pagination;
mod sql;
mod store;

pub(crate) use sql::like_pattern;

// Re-export all public types
pub use column::{InvalidColumn, SearchColumn};
pub use error::{StoreError, StoreErrorKind, StoreOperation, StoreResult};
pub use pagination::Pagination;
pub use store::{CatalogStore, PgCatalogStore};

#[cfg(test)]
pub(crate) use store::memory::MemoryCatalogStore;
