//! # Coupon Table
//!
//! Discount codes, stored upper-cased and unique. Checkout only reads them.

pub mod entity;
pub mod error;

pub use entity::CouponAction;
pub use error::*;

use crate::clients::CouponClient;
use crate::config::SystemConfig;
use crate::framework::TableActor;
use crate::model::Coupon;

/// Creates the Coupon table actor and its client.
pub fn new(config: &SystemConfig) -> (TableActor<Coupon>, CouponClient) {
    let (actor, generic_client) = TableActor::new(config.channel_buffer, config.feed_capacity);
    (actor, CouponClient::new(generic_client))
}
