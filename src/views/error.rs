//! Errors surfaced by the dashboards.

use crate::coupon_actor::CouponError;
use crate::dish_actor::DishError;
use crate::error::ValidationError;
use crate::model::Role;
use crate::order_actor::OrderError;
use crate::order_item_actor::OrderItemError;
use crate::profile_actor::ProfileError;
use crate::restaurant_actor::RestaurantError;
use crate::tracking_actor::TrackingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("This dashboard is for {expected} accounts, not {actual}")]
    WrongRole { expected: Role, actual: Role },

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Restaurant(#[from] RestaurantError),

    #[error(transparent)]
    Dish(#[from] DishError),

    #[error(transparent)]
    Coupon(#[from] CouponError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    OrderItem(#[from] OrderItemError),

    #[error(transparent)]
    Tracking(#[from] TrackingError),
}

impl ViewError {
    /// The validation failure behind this error, looking through order errors.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            ViewError::Validation(e) | ViewError::Order(OrderError::Validation(e)) => Some(e),
            _ => None,
        }
    }
}
