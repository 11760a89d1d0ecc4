//! # DeliveryTracking Table
//!
//! Append-only log of delivery events, one row per claim.

pub mod entity;
pub mod error;

pub use entity::{TrackingAction, TrackingUpdate};
pub use error::*;

use crate::clients::TrackingClient;
use crate::config::SystemConfig;
use crate::framework::TableActor;
use crate::model::DeliveryTracking;

/// Creates the DeliveryTracking table actor and its client.
pub fn new(config: &SystemConfig) -> (TableActor<DeliveryTracking>, TrackingClient) {
    let (actor, generic_client) = TableActor::new(config.channel_buffer, config.feed_capacity);
    (actor, TrackingClient::new(generic_client))
}
