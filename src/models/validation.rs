use rust_decimal::Decimal;

use super::{CreatePizzaRequest, ValidationError, ValidationResult};

/// Trait for validating input models
pub trait Validate {
    fn validate(&self) -> ValidationResult<()>;
}

/// Validation constants
pub const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2); // 0.01
pub const MAX_PRICE: Decimal = Decimal::from_parts(999999, 0, 0, false, 2); // 9999.99

impl Validate for CreatePizzaRequest {
    fn validate(&self) -> ValidationResult<()> {
        validate_pizza_name(&self.name)?;
        validate_pizza_price(&self.price)?;
        Ok(())
    }
}

/// Validate pizza name
pub fn validate_pizza_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validate pizza price
pub fn validate_pizza_price(price: &Decimal) -> ValidationResult<()> {
    if *price < MIN_PRICE || *price > MAX_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: MIN_PRICE.to_string(),
            max: MAX_PRICE.to_string(),
            value: price.to_string(),
        });
    }

    // Prices are money amounts, max 2 decimal places
    if price.scale() > 2 {
        return Err(ValidationError::InvalidValue {
            field: "price".to_string(),
            value: price.to_string(),
            reason: "Price cannot have more than 2 decimal places".to_string(),
        });
    }

    Ok(())
}
