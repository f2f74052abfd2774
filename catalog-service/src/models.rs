//! Catalog data model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single product row from the catalog.
///
/// Rows are created and maintained by the external store; this service only
/// reads them. The field order matches the column list used by the select
/// templates in [`crate::repository`].
///
/// # Example
///
/// ```rust
/// use catalog_service::models::Product;
///
/// let json = r#"{
///     "id": 1,
///     "name": "Widget",
///     "category": "tools",
///     "brand": "Acme",
///     "model": "W-100",
///     "description": "A widget",
///     "price": "19.99",
///     "created_at": "2024-01-01T00:00:00Z"
/// }"#;
/// let product: Product = serde_json::from_str(json).unwrap();
/// assert_eq!(product.brand, "Acme");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    /// Primary key, ascending insertion order
    pub id: i64,

    /// Display name
    pub name: String,

    /// Category label
    pub category: String,

    /// Manufacturer brand
    pub brand: String,

    /// Manufacturer model identifier
    pub model: String,

    /// Free-text description
    pub description: String,

    /// Unit price (NUMERIC column)
    pub price: Decimal,

    /// Row creation timestamp
    pub created_at: DateTime<Utc>,
}
