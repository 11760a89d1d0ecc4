//! Error types for the Dish table.

use crate::error::ValidationError;
use crate::framework::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DishError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Dish not found: {0}")]
    NotFound(String),

    /// The dish belongs to another restaurant.
    #[error("Dish {0} is not on this menu")]
    NotOnMenu(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<StoreError> for DishError {
    fn from(e: StoreError) -> Self {
        match e.into_rejection::<DishError>() {
            Ok(inner) => inner,
            Err(StoreError::NotFound(id)) => DishError::NotFound(id),
            Err(other) => DishError::ActorCommunicationError(other.to_string()),
        }
    }
}
