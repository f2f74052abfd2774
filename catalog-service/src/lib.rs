//! # catalog-service
//!
//! Small HTTP service exposing product catalog data from a PostgreSQL store:
//! a health endpoint, a paginated listing endpoint, and a column-scoped
//! keyword search endpoint.
//!
//! ## Design
//!
//! - **Paging resolution**: untrusted page/limit inputs degrade to safe
//!   defaults instead of rejecting the request (no error path).
//! - **Search columns**: a closed enumeration of five columns is the only
//!   path from caller input to query text; keywords always travel as bind
//!   parameters.
//! - **Store seam**: handlers talk to a [`repository::CatalogStore`] trait,
//!   backed by `sqlx`/PostgreSQL in production and an in-memory catalog in
//!   tests.
//!
//! ## Example
//!
//! ```rust,no_run
//! use catalog_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Load configuration
//!     let config = Config::load_for_service("catalog-service")?;
//!
//!     // Initialize tracing
//!     init_tracing(&config)?;
//!
//!     // Build application state (connects the database pool)
//!     let state = AppState::from_config(config.clone()).await?;
//!
//!     // Create router and run the server
//!     let app = handlers::router(state);
//!     Server::new(config).serve(app).await
//! }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repository;
pub mod server;
pub mod state;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, DatabaseConfig, ServiceConfig};
    pub use crate::error::{Error, ErrorResponse, Result};
    pub use crate::handlers::{
        self, PageParams, PageQuery, ProductPage, SearchRequest, DEFAULT_LIMIT, MAX_LIMIT,
    };
    pub use crate::models::Product;
    pub use crate::observability::init_tracing;
    pub use crate::repository::{
        CatalogStore, Pagination, PgCatalogStore, SearchColumn, StoreError,
    };
    pub use crate::server::Server;
    pub use crate::state::AppState;
}
