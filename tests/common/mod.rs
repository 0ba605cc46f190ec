use std::sync::Arc;

use axum::Router;

use pizza_catalog_rs::services::CatalogService;
use pizza_catalog_rs::store::SqlitePizzaStore;
use pizza_catalog_rs::{create_app, Metrics};

/// Build the full application router over a fresh in-memory store.
///
/// A single pooled connection keeps the in-memory database alive for the
/// lifetime of the test.
pub async fn create_test_app() -> Router {
    let store = SqlitePizzaStore::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to create in-memory store");

    let catalog_service = Arc::new(CatalogService::new(Arc::new(store)));
    let metrics = Arc::new(Metrics::new().expect("Failed to create metrics"));

    create_app(metrics, catalog_service)
}
