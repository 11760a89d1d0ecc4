//! # OrderItem Table
//!
//! Lines of placed orders with the dish price copied at checkout. Rows are written in one
//! `insert_many` batch by the order's `on_create` hook and are immutable afterwards: the update
//! payload is an empty enum and deletes are refused.

pub mod entity;
pub mod error;

pub use entity::{OrderItemAction, OrderItemUpdate};
pub use error::*;

use crate::clients::OrderItemClient;
use crate::config::SystemConfig;
use crate::framework::TableActor;
use crate::model::OrderItem;

/// Creates the OrderItem table actor and its client.
pub fn new(config: &SystemConfig) -> (TableActor<OrderItem>, OrderItemClient) {
    let (actor, generic_client) = TableActor::new(config.channel_buffer, config.feed_capacity);
    (actor, OrderItemClient::new(generic_client))
}
