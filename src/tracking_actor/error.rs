//! Error types for the DeliveryTracking table.

use crate::framework::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("Tracking events are append-only")]
    AppendOnly,

    #[error("Tracking event not found: {0}")]
    NotFound(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<StoreError> for TrackingError {
    fn from(e: StoreError) -> Self {
        match e.into_rejection::<TrackingError>() {
            Ok(inner) => inner,
            Err(StoreError::NotFound(id)) => TrackingError::NotFound(id),
            Err(other) => TrackingError::ActorCommunicationError(other.to_string()),
        }
    }
}
