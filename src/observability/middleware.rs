use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::{sync::Arc, time::Instant};
use tracing::{error, info, instrument, Instrument};

use super::Metrics;

/// Middleware for automatic request logging and metrics collection
pub async fn observability_middleware(
    metrics: Arc<Metrics>,
    request: Request,
    next: Next,
) -> Response {
    let start_time = Instant::now();
    let method = request.method().to_string();
    let uri = request.uri().to_string();

    // Use the matched route for endpoint grouping so path parameters do not
    // explode the metric cardinality
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched_path| matched_path.as_str().to_string())
        .unwrap_or_else(|| uri.clone());

    let span = tracing::info_span!(
        "http_request",
        http.method = %method,
        http.route = %endpoint,
        http.url = %uri,
    );

    async {
        metrics.increment_in_flight(&method, &endpoint);

        info!(method = %method, path = %endpoint, "Processing request");

        let response = next.run(request).await;

        let duration = start_time.elapsed();
        let duration_seconds = duration.as_secs_f64();
        let duration_ms = duration.as_millis();
        let status_code = response.status().as_u16();

        metrics.record_http_request(&method, &endpoint, status_code, duration_seconds);
        metrics.decrement_in_flight(&method, &endpoint);

        if status_code >= 400 {
            error!(
                method = %method,
                path = %endpoint,
                status_code = status_code,
                duration_ms = duration_ms,
                "Request completed with error"
            );
        } else {
            info!(
                method = %method,
                path = %endpoint,
                status_code = status_code,
                duration_ms = duration_ms,
                "Request completed successfully"
            );
        }

        response
    }
    .instrument(span)
    .await
}

/// Middleware specifically for database operation tracing
pub struct DatabaseTracingMiddleware {
    metrics: Arc<Metrics>,
}

impl DatabaseTracingMiddleware {
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self { metrics }
    }

    /// Trace a database operation with automatic metrics recording
    #[instrument(skip_all, fields(
        operation = %operation,
        table = %table,
    ))]
    pub async fn trace_operation<F, T, E>(
        &self,
        operation: &str,
        table: &str,
        future: F,
    ) -> Result<T, E>
    where
        F: std::future::Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let start_time = Instant::now();

        info!("Starting database operation");

        match future.await {
            Ok(result) => {
                let duration_seconds = start_time.elapsed().as_secs_f64();
                self.metrics
                    .record_database_operation(operation, table, true, duration_seconds);

                info!(
                    duration_ms = start_time.elapsed().as_millis(),
                    "Database operation completed successfully"
                );

                Ok(result)
            }
            Err(error) => {
                let duration_seconds = start_time.elapsed().as_secs_f64();
                self.metrics
                    .record_database_operation(operation, table, false, duration_seconds);

                error!(
                    error = %error,
                    duration_ms = start_time.elapsed().as_millis(),
                    "Database operation failed"
                );

                Err(error)
            }
        }
    }
}

/// Middleware for business operation tracing
pub struct BusinessTracingMiddleware {
    metrics: Arc<Metrics>,
}

impl BusinessTracingMiddleware {
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self { metrics }
    }

    /// Trace a pizza catalog operation
    #[instrument(skip_all, fields(
        operation = %operation,
    ))]
    pub async fn trace_pizza_operation<F, T, E>(
        &self,
        operation: &str,
        future: F,
    ) -> Result<T, E>
    where
        F: std::future::Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let start_time = Instant::now();

        info!("Starting pizza operation");

        match future.await {
            Ok(result) => {
                self.metrics.record_pizza_operation(operation, true);

                info!(
                    duration_ms = start_time.elapsed().as_millis(),
                    "Pizza operation completed successfully"
                );

                Ok(result)
            }
            Err(error) => {
                self.metrics.record_pizza_operation(operation, false);

                error!(
                    error = %error,
                    duration_ms = start_time.elapsed().as_millis(),
                    "Pizza operation failed"
                );

                Err(error)
            }
        }
    }
}
