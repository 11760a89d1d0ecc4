//! Error types for the Restaurant table.

use crate::error::ValidationError;
use crate::framework::StoreError;
use crate::profile_actor::ProfileError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RestaurantError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Restaurant not found: {0}")]
    NotFound(String),

    /// The owner already runs a restaurant.
    #[error("Owner already has a restaurant: {0}")]
    AlreadyRegistered(String),

    #[error("Invalid owner: {0}")]
    InvalidOwner(String),

    #[error("Rating must be between 0 and 5")]
    InvalidRating,

    #[error("Profile lookup failed: {0}")]
    Profile(#[from] ProfileError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<StoreError> for RestaurantError {
    fn from(e: StoreError) -> Self {
        match e.into_rejection::<RestaurantError>() {
            Ok(inner) => inner,
            Err(StoreError::NotFound(id)) => RestaurantError::NotFound(id),
            Err(StoreError::Conflict(owner)) => RestaurantError::AlreadyRegistered(owner),
            Err(other) => RestaurantError::ActorCommunicationError(other.to_string()),
        }
    }
}
