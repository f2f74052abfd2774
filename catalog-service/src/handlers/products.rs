//! Paginated catalog listing handler

use axum::extract::{Query, State};
use tracing::field::Empty;

use super::query::PageQuery;
use super::response::ProductPage;
use crate::{error::Result, repository::CatalogStore, state::AppState};

/// `GET /products` — one page of the full catalog
///
/// Paging inputs are normalized per the resolver's silent-default policy;
/// there is no client-error path for bad pagination. The count query runs
/// first; if it fails, the data query is never issued.
#[tracing::instrument(
    name = "get_products",
    skip_all,
    fields(page = Empty, limit = Empty, offset = Empty, total_count = Empty, returned_count = Empty)
)]
pub async fn list_products<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<PageQuery>,
) -> Result<ProductPage>
where
    S: CatalogStore + Clone + Send + Sync + 'static,
{
    let params = query.resolve();

    let span = tracing::Span::current();
    span.record("page", params.page);
    span.record("limit", params.limit);
    span.record("offset", params.offset());

    let count = state.store().count().await?;
    span.record("total_count", count);

    let products = state.store().list(params.window()).await?;
    span.record("returned_count", products.len() as u64);

    tracing::debug!(
        total = count,
        returned = products.len(),
        "catalog page fetched"
    );

    Ok(ProductPage::new(products, params, count))
}
