//! Error types for the OrderItem table.

use crate::error::ValidationError;
use crate::framework::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderItemError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Order items cannot be removed")]
    Immutable,

    #[error("Order item not found: {0}")]
    NotFound(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<StoreError> for OrderItemError {
    fn from(e: StoreError) -> Self {
        match e.into_rejection::<OrderItemError>() {
            Ok(inner) => inner,
            Err(StoreError::NotFound(id)) => OrderItemError::NotFound(id),
            Err(other) => OrderItemError::ActorCommunicationError(other.to_string()),
        }
    }
}
