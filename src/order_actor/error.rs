//! Error types for the Order table.

use crate::error::ValidationError;
use crate::framework::StoreError;
use crate::model::OrderStatus;
use crate::restaurant_actor::RestaurantError;
use thiserror::Error;

/// Errors that can occur during order placement and status transitions.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The transition is not in the lifecycle table.
    #[error("Cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// The caller may not perform this transition on this order.
    #[error("Not allowed: {0}")]
    Forbidden(String),

    #[error("Order is already assigned to a delivery agent")]
    AlreadyClaimed,

    #[error("Restaurant is not accepting orders: {0}")]
    RestaurantUnavailable(String),

    #[error("Restaurant lookup failed: {0}")]
    Restaurant(#[from] RestaurantError),

    /// The order lines could not be written, so the order was not placed.
    #[error("Order items rejected: {0}")]
    ItemsRejected(String),

    #[error("Orders are never deleted")]
    Immutable,

    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<StoreError> for OrderError {
    fn from(e: StoreError) -> Self {
        match e.into_rejection::<OrderError>() {
            Ok(inner) => inner,
            Err(StoreError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
