//! # Dish Table
//!
//! Menu entries. A dish belongs to exactly one restaurant; the restaurant view only ever
//! touches dishes whose `restaurant_id` is its own.

pub mod entity;
pub mod error;

pub use entity::DishAction;
pub use error::*;

use crate::clients::DishClient;
use crate::config::SystemConfig;
use crate::framework::TableActor;
use crate::model::Dish;

/// Creates the Dish table actor and its client.
pub fn new(config: &SystemConfig) -> (TableActor<Dish>, DishClient) {
    let (actor, generic_client) = TableActor::new(config.channel_buffer, config.feed_capacity);
    (actor, DishClient::new(generic_client))
}
