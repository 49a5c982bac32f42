use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Invalid quantity for {field}: '{value}'")]
    InvalidQuantity { field: String, value: String },

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}
