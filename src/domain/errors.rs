use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0} is required")]
    MissingParameter(&'static str),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid action specified")]
    InvalidOperation,
    #[error("Cart item not found")]
    NotFound,
    #[error("Cart belongs to another customer")]
    Forbidden,
    #[error("Internal error: {0}")]
    Internal(String),
}
