use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::models::{CreatePizzaRequest, Pizza, PizzaListResponse, ServiceError};
use crate::services::CatalogService;

/// Shared application state for the JSON API and page handlers
#[derive(Clone)]
pub struct ApiState {
    pub catalog_service: Arc<CatalogService>,
}

/// List all pizzas in the catalog
#[instrument(name = "list_pizzas", skip(state))]
pub async fn list_pizzas(
    State(state): State<ApiState>,
) -> Result<Json<PizzaListResponse>, (StatusCode, Json<Value>)> {
    match state.catalog_service.get_pizzas().await {
        Ok(response) => {
            info!("Successfully listed {} pizzas", response.total_count);
            Ok(Json(response))
        }
        Err(err) => {
            error!("Failed to list pizzas: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// Get a specific pizza by id
#[instrument(name = "get_pizza", skip(state), fields(pizza_id = %pizza_id))]
pub async fn get_pizza(
    State(state): State<ApiState>,
    Path(pizza_id): Path<i64>,
) -> Result<Json<Pizza>, (StatusCode, Json<Value>)> {
    match state.catalog_service.get_pizza(pizza_id).await {
        Ok(pizza) => {
            info!("Successfully retrieved pizza: {}", pizza.name);
            Ok(Json(pizza))
        }
        Err(err) => {
            error!("Failed to get pizza {}: {}", pizza_id, err);
            Err(service_error_to_response(err))
        }
    }
}

/// Add a new pizza to the catalog
#[instrument(name = "create_pizza", skip(state, request), fields(
    name = %request.name,
    size = %request.size,
    price = %request.price,
))]
pub async fn create_pizza(
    State(state): State<ApiState>,
    Json(request): Json<CreatePizzaRequest>,
) -> Result<(StatusCode, Json<Pizza>), (StatusCode, Json<Value>)> {
    info!("Creating new pizza: {}", request.name);

    match state.catalog_service.add_pizza(request).await {
        Ok(pizza) => {
            info!("Successfully created pizza with id {}", pizza.id);
            Ok((StatusCode::CREATED, Json(pizza)))
        }
        Err(err) => {
            error!("Failed to create pizza: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// Delete a pizza by id
#[instrument(name = "delete_pizza", skip(state), fields(pizza_id = %pizza_id))]
pub async fn delete_pizza(
    State(state): State<ApiState>,
    Path(pizza_id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    match state.catalog_service.delete_pizza(pizza_id).await {
        Ok(true) => {
            info!("Successfully deleted pizza: {}", pizza_id);
            Ok(StatusCode::NO_CONTENT)
        }
        Ok(false) => {
            info!("Pizza {} not found, nothing deleted", pizza_id);
            Err(service_error_to_response(ServiceError::PizzaNotFound {
                id: pizza_id,
            }))
        }
        Err(err) => {
            error!("Failed to delete pizza {}: {}", pizza_id, err);
            Err(service_error_to_response(err))
        }
    }
}

/// Convert ServiceError to HTTP response
fn service_error_to_response(err: ServiceError) -> (StatusCode, Json<Value>) {
    let status = match err {
        ServiceError::PizzaNotFound { .. } => StatusCode::NOT_FOUND,
        ServiceError::Validation { .. } => StatusCode::BAD_REQUEST,
        ServiceError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(json!({
            "error": err.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StoreError;

    #[test]
    fn test_service_error_status_mapping() {
        let (status, _) = service_error_to_response(ServiceError::PizzaNotFound { id: 1 });
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = service_error_to_response(ServiceError::Validation {
            message: "Required field missing: name".to_string(),
        });
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = service_error_to_response(ServiceError::Store {
            source: StoreError::Database(sqlx::Error::PoolClosed),
        });
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_contains_message_and_timestamp() {
        let (_, Json(body)) = service_error_to_response(ServiceError::PizzaNotFound { id: 3 });

        assert_eq!(body["error"], "Pizza not found: 3");
        assert!(body["timestamp"].is_string());
    }
}
