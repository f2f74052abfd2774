//! HTTP handlers and router assembly
//!
//! Listing and search share one core: paging inputs resolve through
//! [`PageQuery`]/[`PageParams`] (silent defaults, no error path), queries
//! execute through the [`CatalogStore`](crate::repository::CatalogStore)
//! seam, and results assemble into a [`ProductPage`] envelope. The method
//! router produces 405 for anything but the declared verbs, so `/search`
//! only ever reaches the handler as a POST.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{repository::CatalogStore, state::AppState};

mod health;
mod products;
mod query;
mod response;
mod search;

// Re-export all public types
pub use health::{health, HealthResponse};
pub use products::list_products;
pub use query::{PageParams, PageQuery, DEFAULT_LIMIT, MAX_LIMIT};
pub use response::ProductPage;
pub use search::{search_products, SearchRequest};

/// Build the service router over any catalog store
pub fn router<S>(state: AppState<S>) -> Router
where
    S: CatalogStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health::<S>))
        .route("/products", get(list_products::<S>))
        .route("/search", post(search_products::<S>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use chrono::Utc;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::error::ErrorResponse;
    use crate::models::Product;
    use crate::repository::MemoryCatalogStore;

    fn product(id: i64, brand: &str) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            category: "general".to_string(),
            brand: brand.to_string(),
            model: format!("M-{id}"),
            description: format!("Description for product {id}"),
            price: Decimal::new(1999, 2),
            created_at: Utc::now(),
        }
    }

    fn catalog_of(count: i64) -> Vec<Product> {
        (1..=count).map(|id| product(id, "globex")).collect()
    }

    fn app(store: MemoryCatalogStore) -> Router {
        router(AppState::with_store(Config::default(), store))
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_returns_requested_window() {
        let app = app(MemoryCatalogStore::new(catalog_of(12)));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/products?page=2&limit=5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page: ProductPage = body_json(response).await;

        let ids: Vec<i64> = page.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![6, 7, 8, 9, 10]);
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 5);
        assert_eq!(page.count, 12);
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn test_list_normalizes_bad_pagination_silently() {
        let app = app(MemoryCatalogStore::new(catalog_of(3)));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/products?page=abc&limit=999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Never a client error for malformed paging
        assert_eq!(response.status(), StatusCode::OK);
        let page: ProductPage = body_json(response).await;
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, DEFAULT_LIMIT);
        assert_eq!(page.count, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_list_without_params_uses_defaults() {
        let app = app(MemoryCatalogStore::new(catalog_of(25)));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/products")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let page: ProductPage = body_json(response).await;
        assert_eq!(page.products.len(), 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn test_search_matches_by_brand() {
        let mut products = catalog_of(5);
        products.push(product(6, "acme"));
        products.push(product(7, "acme industries"));
        products.push(product(8, "the acme co"));
        let app = app(MemoryCatalogStore::new(products));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/search")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"column":"brand","keyword":"acme","page":1,"limit":10}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page: ProductPage = body_json(response).await;
        let ids: Vec<i64> = page.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![6, 7, 8]);
        assert_eq!(page.count, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_search_trims_keyword() {
        let mut products = catalog_of(2);
        products.push(product(9, "phonecorp"));
        let app = app(MemoryCatalogStore::new(products));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/search")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"column":"brand","keyword":" phone "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        let page: ProductPage = body_json(response).await;
        assert_eq!(page.count, 1);
        assert_eq!(page.products[0].id, 9);
    }

    #[tokio::test]
    async fn test_search_invalid_column_issues_no_queries() {
        let store = MemoryCatalogStore::new(catalog_of(3));
        let app = app(store.clone());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/search")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"column":"price","keyword":"10"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = body_json(response).await;
        assert_eq!(error.code.as_deref(), Some("INVALID_COLUMN"));
        assert_eq!(store.queries_issued(), 0);
    }

    #[tokio::test]
    async fn test_search_malformed_body_is_bad_request() {
        let store = MemoryCatalogStore::new(catalog_of(3));
        let app = app(store.clone());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/search")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = body_json(response).await;
        assert_eq!(error.code.as_deref(), Some("BAD_REQUEST"));
        assert_eq!(store.queries_issued(), 0);
    }

    #[tokio::test]
    async fn test_search_rejects_non_post_methods() {
        let app = app(MemoryCatalogStore::new(catalog_of(1)));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/search")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_health_reports_service_identity() {
        let app = app(MemoryCatalogStore::new(vec![]));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = body_json(response).await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.service, "catalog-service");
    }
}
