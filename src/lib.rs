pub mod config;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod services;
pub mod store;

pub use config::{Config, ConfigError};
pub use observability::{init_observability, Metrics};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use handlers::{
    api, cors_middleware, health_check, metrics_handler, pages, request_validation_middleware,
    security_headers_middleware,
};
use observability::observability_middleware;
use services::CatalogService;

/// Build the application router with all routes and middleware layers
pub fn create_app(metrics: Arc<Metrics>, catalog_service: Arc<CatalogService>) -> Router {
    let metrics_for_middleware = metrics.clone();

    let api_state = api::ApiState { catalog_service };

    Router::new()
        // Health and metrics endpoints (with metrics state)
        .route("/health/status", get(health_check))
        .route("/metrics", get(metrics_handler))
        .with_state(metrics)
        // Server-rendered catalog page
        .route("/", get(pages::catalog_page))
        .route("/pizzas", post(pages::add_pizza_form))
        .route("/pizzas/:pizza_id/delete", post(pages::delete_pizza_form))
        // JSON API
        .route("/api/pizzas", get(api::list_pizzas).post(api::create_pizza))
        .route(
            "/api/pizzas/:pizza_id",
            get(api::get_pizza).delete(api::delete_pizza),
        )
        .with_state(api_state)
        // Middleware layers (order matters - outer to inner)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(cors_middleware))
        .layer(middleware::from_fn(request_validation_middleware))
        .layer(middleware::from_fn(move |req, next| {
            observability_middleware(metrics_for_middleware.clone(), req, next)
        }))
}
