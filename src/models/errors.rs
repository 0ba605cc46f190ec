use thiserror::Error;

/// Service-level errors that can occur in catalog logic
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Pizza not found: {id}")]
    PizzaNotFound { id: i64 },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Store error: {source}")]
    Store { source: StoreError },
}

/// Store-level errors for data access operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid row: {message}")]
    InvalidRow { message: String },
}

/// Validation errors for input data
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredField { field: String },

    #[error("Value out of range: {field}, min={min}, max={max}, value={value}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
        value: String,
    },

    #[error("Invalid field value: {field}={value}, reason={reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::Validation {
            message: err.to_string(),
        }
    }
}

// Store validation failures surface to callers as validation errors, not as
// opaque store failures.
impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(source) => source.into(),
            other => ServiceError::Store { source: other },
        }
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
