use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::models::{
    CreatePizzaRequest, Pizza, PizzaListResponse, ServiceError, ServiceResult,
};
use crate::store::PizzaStore;

/// Service for managing the pizza catalog
///
/// A thin façade over the store. The store reference is established at
/// construction and always valid; callers that cannot build a store cannot
/// build a service.
pub struct CatalogService {
    store: Arc<dyn PizzaStore>,
}

impl CatalogService {
    /// Create a new CatalogService over the given store
    pub fn new(store: Arc<dyn PizzaStore>) -> Self {
        Self { store }
    }

    /// List every pizza in the catalog
    #[instrument(skip(self))]
    pub async fn get_pizzas(&self) -> ServiceResult<PizzaListResponse> {
        let pizzas = self.store.list_all().await?;
        let total_count = pizzas.len();

        info!("Found {} pizzas in catalog", total_count);

        Ok(PizzaListResponse {
            pizzas,
            total_count,
        })
    }

    /// Get a specific pizza by id
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_pizza(&self, id: i64) -> ServiceResult<Pizza> {
        match self.store.find_by_id(id).await? {
            Some(pizza) => {
                info!("Pizza found");
                Ok(pizza)
            }
            None => {
                warn!("Pizza not found");
                Err(ServiceError::PizzaNotFound { id })
            }
        }
    }

    /// Add a new pizza to the catalog
    #[instrument(skip(self, request), fields(name = %request.name, size = %request.size, price = %request.price))]
    pub async fn add_pizza(&self, request: CreatePizzaRequest) -> ServiceResult<Pizza> {
        let pizza = self.store.add(request).await?;

        info!("Pizza added with id {}", pizza.id);
        Ok(pizza)
    }

    /// Delete a pizza from the catalog
    ///
    /// Returns false when no pizza with the given id existed; repeated
    /// deletes are harmless.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_pizza(&self, id: i64) -> ServiceResult<bool> {
        let deleted = self.store.delete_by_id(id).await?;

        if deleted {
            info!("Pizza deleted");
        } else {
            info!("Pizza already absent, nothing to delete");
        }

        Ok(deleted)
    }
}
