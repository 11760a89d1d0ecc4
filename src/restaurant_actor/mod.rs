//! # Restaurant Table
//!
//! Restaurants are registered by a profile with the `restaurant` role. The table keeps the owner
//! id unique, so one owner never ends up with two restaurants and a lookup by owner returns at
//! most one row.
//!
//! ## Dependencies
//!
//! `on_create` checks the owner through the [`ProfileClient`] injected at `run()`.

pub mod entity;
pub mod error;

pub use entity::RestaurantAction;
pub use error::*;

use crate::clients::RestaurantClient;
use crate::config::SystemConfig;
use crate::framework::TableActor;
use crate::model::Restaurant;

/// Creates the Restaurant table actor and its client.
pub fn new(config: &SystemConfig) -> (TableActor<Restaurant>, RestaurantClient) {
    let (actor, generic_client) = TableActor::new(config.channel_buffer, config.feed_capacity);
    (actor, RestaurantClient::new(generic_client))
}
