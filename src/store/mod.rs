use async_trait::async_trait;

use crate::models::{CreatePizzaRequest, Pizza, StoreResult};

pub use self::sqlite::SqlitePizzaStore;

mod sqlite;

/// Trait defining the interface for pizza persistence operations
#[async_trait]
pub trait PizzaStore: Send + Sync {
    /// List every stored pizza in insertion order
    async fn list_all(&self) -> StoreResult<Vec<Pizza>>;

    /// Find a pizza by its id
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Pizza>>;

    /// Validate and persist a new pizza, returning it with its assigned id
    async fn add(&self, request: CreatePizzaRequest) -> StoreResult<Pizza>;

    /// Delete a pizza by id; returns false when no such row existed
    async fn delete_by_id(&self, id: i64) -> StoreResult<bool>;
}
