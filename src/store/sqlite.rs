use std::str::FromStr;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use tracing::{info, instrument};

use crate::models::{CreatePizzaRequest, Pizza, PizzaSize, StoreError, StoreResult, Validate};

use super::PizzaStore;

/// The pizzas table, owned by this store.
///
/// `size` and `price` are TEXT columns round-tripped through the model's
/// `FromStr` conversions; SQLite has no native decimal type.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS pizzas (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    size TEXT NOT NULL,
    is_gluten_free BOOLEAN NOT NULL,
    price TEXT NOT NULL
)
"#;

/// SQLite implementation of the PizzaStore trait
pub struct SqlitePizzaStore {
    pool: SqlitePool,
}

impl SqlitePizzaStore {
    /// Connect to the given SQLite database and ensure the schema exists
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        info!(
            "Connecting to database (max_connections={})",
            max_connections
        );
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Create the pizzas table if it does not exist
    pub async fn init_schema(&self) -> StoreResult<()> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Convert a database row to a Pizza
    fn row_to_pizza(row: &SqliteRow) -> StoreResult<Pizza> {
        let size_raw: String = row.try_get("size")?;
        let size = PizzaSize::from_str(&size_raw).map_err(|e| StoreError::InvalidRow {
            message: format!("Invalid size: {}", e),
        })?;

        let price_raw: String = row.try_get("price")?;
        let price = Decimal::from_str(&price_raw).map_err(|e| StoreError::InvalidRow {
            message: format!("Invalid price: {}", e),
        })?;

        Ok(Pizza {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            size,
            is_gluten_free: row.try_get("is_gluten_free")?,
            price,
        })
    }
}

#[async_trait]
impl PizzaStore for SqlitePizzaStore {
    #[instrument(skip(self))]
    async fn list_all(&self) -> StoreResult<Vec<Pizza>> {
        let rows = sqlx::query(
            "SELECT id, name, size, is_gluten_free, price FROM pizzas ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let pizzas = rows
            .iter()
            .map(Self::row_to_pizza)
            .collect::<StoreResult<Vec<Pizza>>>()?;

        info!("Found {} pizzas", pizzas.len());
        Ok(pizzas)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Pizza>> {
        let row = sqlx::query(
            "SELECT id, name, size, is_gluten_free, price FROM pizzas WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let pizza = Self::row_to_pizza(&row)?;
                info!("Pizza found");
                Ok(Some(pizza))
            }
            None => {
                info!("Pizza not found");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn add(&self, request: CreatePizzaRequest) -> StoreResult<Pizza> {
        request.validate()?;

        let result = sqlx::query(
            "INSERT INTO pizzas (name, size, is_gluten_free, price) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(request.name.clone())
        .bind(request.size.to_string())
        .bind(request.is_gluten_free)
        .bind(request.price.to_string())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        info!("Pizza created with id {}", id);
        Ok(Pizza::from_request(id, request))
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM pizzas WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        info!("Pizza deleted: {}", deleted);
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValidationError;
    use rust_decimal_macros::dec;

    async fn create_test_store() -> SqlitePizzaStore {
        SqlitePizzaStore::connect("sqlite::memory:", 1)
            .await
            .expect("Failed to create in-memory store")
    }

    fn margherita() -> CreatePizzaRequest {
        CreatePizzaRequest {
            name: "Margherita".to_string(),
            size: PizzaSize::Medium,
            is_gluten_free: false,
            price: dec!(8.99),
        }
    }

    fn pepperoni() -> CreatePizzaRequest {
        CreatePizzaRequest {
            name: "Pepperoni".to_string(),
            size: PizzaSize::Large,
            is_gluten_free: false,
            price: dec!(10.50),
        }
    }

    #[tokio::test]
    async fn test_add_assigns_sequential_ids() {
        let store = create_test_store().await;

        let first = store.add(margherita()).await.unwrap();
        let second = store.add(pepperoni()).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_add_then_list_round_trip() {
        let store = create_test_store().await;

        let request = margherita();
        let created = store.add(request.clone()).await.unwrap();

        assert_eq!(created.name, request.name);
        assert_eq!(created.size, request.size);
        assert_eq!(created.is_gluten_free, request.is_gluten_free);
        assert_eq!(created.price, request.price);

        let pizzas = store.list_all().await.unwrap();
        assert_eq!(pizzas.len(), 1);
        assert_eq!(pizzas[0], created);
    }

    #[tokio::test]
    async fn test_find_by_id_round_trip() {
        let store = create_test_store().await;

        let created = store.add(pepperoni()).await.unwrap();
        let found = store.find_by_id(created.id).await.unwrap();

        assert_eq!(found, Some(created));
        assert_eq!(store.find_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_add_rejects_empty_name() {
        let store = create_test_store().await;

        let mut request = margherita();
        request.name = "   ".to_string();

        let result = store.add(request).await;
        match result.unwrap_err() {
            StoreError::Validation(ValidationError::RequiredField { field }) => {
                assert_eq!(field, "name");
            }
            other => panic!("Expected validation error, got {:?}", other),
        }

        // Collection unchanged
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_out_of_range_price() {
        let store = create_test_store().await;

        for price in [dec!(0.00), dec!(-0.01), dec!(10000.00)] {
            let mut request = margherita();
            request.price = price;

            let result = store.add(request).await;
            assert!(matches!(
                result,
                Err(StoreError::Validation(ValidationError::OutOfRange { .. }))
            ));
        }

        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = create_test_store().await;

        let created = store.add(margherita()).await.unwrap();

        assert!(store.delete_by_id(created.id).await.unwrap());
        let after_first = store.list_all().await.unwrap();

        assert!(!store.delete_by_id(created.id).await.unwrap());
        let after_second = store.list_all().await.unwrap();

        assert_eq!(after_first, after_second);
        assert!(after_second.is_empty());
    }

    #[tokio::test]
    async fn test_catalog_scenario() {
        let store = create_test_store().await;

        let first = store.add(margherita()).await.unwrap();
        let listed = store.list_all().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, 1);
        assert_eq!(listed[0].name, "Margherita");
        assert_eq!(listed[0].price, dec!(8.99));

        let second = store.add(pepperoni()).await.unwrap();
        let listed = store.list_all().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);

        assert!(store.delete_by_id(first.id).await.unwrap());
        let listed = store.list_all().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Pepperoni");
    }

    #[tokio::test]
    async fn test_price_and_size_survive_storage() {
        let store = create_test_store().await;

        let mut request = margherita();
        request.size = PizzaSize::Small;
        request.price = dec!(0.01);
        let created = store.add(request).await.unwrap();

        let found = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.size, PizzaSize::Small);
        assert_eq!(found.price, dec!(0.01));
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let store = create_test_store().await;
        store.init_schema().await.unwrap();

        store.add(margherita()).await.unwrap();
        store.init_schema().await.unwrap();

        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }
}
