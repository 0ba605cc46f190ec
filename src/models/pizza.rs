use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PizzaSize;

/// Core pizza catalog model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub size: PizzaSize,
    pub is_gluten_free: bool,
    pub price: Decimal,
}

/// Request model for adding a pizza to the catalog
///
/// The store assigns the `id` on insert; callers never supply one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePizzaRequest {
    pub name: String,
    pub size: PizzaSize,
    pub is_gluten_free: bool,
    pub price: Decimal,
}

/// Response model for catalog listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PizzaListResponse {
    pub pizzas: Vec<Pizza>,
    pub total_count: usize,
}

impl Pizza {
    /// Build a stored Pizza from an accepted request and its assigned id
    pub fn from_request(id: i64, request: CreatePizzaRequest) -> Self {
        Self {
            id,
            name: request.name,
            size: request.size,
            is_gluten_free: request.is_gluten_free,
            price: request.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_test_pizza_request() -> CreatePizzaRequest {
        CreatePizzaRequest {
            name: "Margherita".to_string(),
            size: PizzaSize::Medium,
            is_gluten_free: false,
            price: dec!(8.99),
        }
    }

    #[test]
    fn test_pizza_from_request() {
        let request = create_test_pizza_request();
        let pizza = Pizza::from_request(1, request.clone());

        assert_eq!(pizza.id, 1);
        assert_eq!(pizza.name, request.name);
        assert_eq!(pizza.size, request.size);
        assert_eq!(pizza.is_gluten_free, request.is_gluten_free);
        assert_eq!(pizza.price, request.price);
    }

    #[test]
    fn test_serde_serialization() {
        let pizza = Pizza::from_request(7, create_test_pizza_request());

        let json = serde_json::to_string(&pizza).unwrap();
        let deserialized: Pizza = serde_json::from_str(&json).unwrap();

        assert_eq!(pizza, deserialized);
    }

    #[test]
    fn test_wire_field_names() {
        let pizza = Pizza::from_request(1, create_test_pizza_request());
        let value = serde_json::to_value(&pizza).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Margherita");
        assert_eq!(value["size"], "medium");
        assert_eq!(value["is_gluten_free"], false);
    }
}
