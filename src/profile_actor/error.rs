//! Error types for the Profile table.

use crate::error::ValidationError;
use crate::framework::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Profile not found: {0}")]
    NotFound(String),

    #[error("Profile already exists: {0}")]
    AlreadyExists(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<StoreError> for ProfileError {
    fn from(e: StoreError) -> Self {
        match e.into_rejection::<ProfileError>() {
            Ok(inner) => inner,
            Err(StoreError::NotFound(id)) => ProfileError::NotFound(id),
            Err(StoreError::Conflict(key)) => ProfileError::AlreadyExists(key),
            Err(other) => ProfileError::ActorCommunicationError(other.to_string()),
        }
    }
}
