//! Column-scoped keyword search handler

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::field::Empty;

use super::query::PageParams;
use super::response::ProductPage;
use crate::{
    error::{Error, Result},
    repository::{like_pattern, CatalogStore, SearchColumn},
    state::AppState,
};

/// Search request body
///
/// `column` stays a plain string here so that membership in the allow-list
/// is checked explicitly in the handler, keeping the rejection distinct from
/// a body that fails to decode. Absent page/limit decode as 0 and are
/// normalized like any other out-of-range value.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    /// Column to search; must be in the allow-list
    pub column: String,

    /// Substring to match
    pub keyword: String,

    /// Page number (1-indexed)
    #[serde(default)]
    pub page: i64,

    /// Items per page
    #[serde(default)]
    pub limit: i64,
}

/// `POST /search` — one page of rows matching a keyword in one column
///
/// Column validation happens before any query construction or store call;
/// an unknown column produces a 400 and issues zero queries. The keyword is
/// trimmed, wrapped as `%keyword%`, and bound as a parameter. Count runs
/// before data, sequentially, over the same predicate.
#[tracing::instrument(
    name = "search_products",
    skip_all,
    fields(column = Empty, keyword = Empty, page = Empty, limit = Empty, total_count = Empty, returned_count = Empty)
)]
pub async fn search_products<S>(
    State(state): State<AppState<S>>,
    body: std::result::Result<Json<SearchRequest>, JsonRejection>,
) -> Result<ProductPage>
where
    S: CatalogStore + Clone + Send + Sync + 'static,
{
    let Json(request) = body.map_err(|rejection| {
        tracing::warn!("failed to decode search request: {rejection}");
        Error::BadRequest("Invalid request body".to_string())
    })?;

    let span = tracing::Span::current();
    span.record("column", request.column.as_str());
    span.record("keyword", request.keyword.as_str());

    let column: SearchColumn = request.column.parse()?;
    let params = PageParams::clamp(request.page, request.limit);
    span.record("page", params.page);
    span.record("limit", params.limit);

    let pattern = like_pattern(&request.keyword);

    let count = state.store().count_matching(column, &pattern).await?;
    span.record("total_count", count);

    let products = state
        .store()
        .search(column, &pattern, params.window())
        .await?;
    span.record("returned_count", products.len() as u64);

    tracing::debug!(
        %column,
        total = count,
        returned = products.len(),
        "search page fetched"
    );

    Ok(ProductPage::new(products, params, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_defaults_page_and_limit() {
        let request: SearchRequest =
            serde_json::from_str(r#"{"column":"brand","keyword":"acme"}"#).unwrap();
        assert_eq!(request.page, 0);
        assert_eq!(request.limit, 0);

        let params = PageParams::clamp(request.page, request.limit);
        assert_eq!(params, PageParams::default());
    }

    #[test]
    fn test_request_body_full_decode() {
        let request: SearchRequest = serde_json::from_str(
            r#"{"column":"name","keyword":" phone ","page":2,"limit":25}"#,
        )
        .unwrap();
        assert_eq!(request.column, "name");
        assert_eq!(request.keyword, " phone ");
        assert_eq!(request.page, 2);
        assert_eq!(request.limit, 25);
    }
}
