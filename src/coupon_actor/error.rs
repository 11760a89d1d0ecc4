//! Error types for the Coupon table.

use crate::framework::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CouponError {
    #[error("Coupon code is required")]
    MissingCode,

    #[error("Invalid discount value: {0}")]
    InvalidValue(f64),

    #[error("Coupon code already exists: {0}")]
    DuplicateCode(String),

    #[error("Coupon not found: {0}")]
    NotFound(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<StoreError> for CouponError {
    fn from(e: StoreError) -> Self {
        match e.into_rejection::<CouponError>() {
            Ok(inner) => inner,
            Err(StoreError::NotFound(id)) => CouponError::NotFound(id),
            Err(StoreError::Conflict(code)) => CouponError::DuplicateCode(code),
            Err(other) => CouponError::ActorCommunicationError(other.to_string()),
        }
    }
}
