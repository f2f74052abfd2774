//! Static SQL templates for catalog queries
//!
//! Every statement here is a compile-time constant; the only caller-chosen
//! piece of query *text* is the [`SearchColumn`] variant, resolved through a
//! `match` onto a fixed template. Keywords travel as bind parameters.

use super::column::SearchColumn;

/// Count of the full catalog
pub(crate) const LIST_COUNT: &str = "SELECT COUNT(*) FROM products";

/// One page of the full catalog, stable primary key ascending
pub(crate) const LIST_SELECT: &str = "SELECT id, name, category, brand, model, description, price, created_at \
     FROM products ORDER BY id LIMIT $1 OFFSET $2";

/// Count of rows whose column matches the bound pattern
pub(crate) const fn search_count(column: SearchColumn) -> &'static str {
    match column {
        SearchColumn::Name => "SELECT COUNT(*) FROM products WHERE name LIKE $1",
        SearchColumn::Category => "SELECT COUNT(*) FROM products WHERE category LIKE $1",
        SearchColumn::Brand => "SELECT COUNT(*) FROM products WHERE brand LIKE $1",
        SearchColumn::Model => "SELECT COUNT(*) FROM products WHERE model LIKE $1",
        SearchColumn::Description => "SELECT COUNT(*) FROM products WHERE description LIKE $1",
    }
}

/// One page of rows whose column matches the bound pattern, same ordering
/// and window semantics as [`LIST_SELECT`]
pub(crate) const fn search_select(column: SearchColumn) -> &'static str {
    match column {
        SearchColumn::Name => {
            "SELECT id, name, category, brand, model, description, price, created_at \
             FROM products WHERE name LIKE $1 ORDER BY id LIMIT $2 OFFSET $3"
        }
        SearchColumn::Category => {
            "SELECT id, name, category, brand, model, description, price, created_at \
             FROM products WHERE category LIKE $1 ORDER BY id LIMIT $2 OFFSET $3"
        }
        SearchColumn::Brand => {
            "SELECT id, name, category, brand, model, description, price, created_at \
             FROM products WHERE brand LIKE $1 ORDER BY id LIMIT $2 OFFSET $3"
        }
        SearchColumn::Model => {
            "SELECT id, name, category, brand, model, description, price, created_at \
             FROM products WHERE model LIKE $1 ORDER BY id LIMIT $2 OFFSET $3"
        }
        SearchColumn::Description => {
            "SELECT id, name, category, brand, model, description, price, created_at \
             FROM products WHERE description LIKE $1 ORDER BY id LIMIT $2 OFFSET $3"
        }
    }
}

/// Wrap a keyword as a substring pattern, trimming surrounding whitespace.
///
/// Case sensitivity of the resulting match follows the store's collation
/// (PostgreSQL `LIKE` is case-sensitive).
pub(crate) fn like_pattern(keyword: &str) -> String {
    format!("%{}%", keyword.trim())
}
