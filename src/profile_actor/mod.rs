//! # Profile Table
//!
//! Public identity of every signed-up user: email, name, phone and the role that decides which
//! dashboard they get. A profile shares its id with the credential account created at sign-up
//! (see [`crate::auth`]) and its role never changes.

pub mod entity;
pub mod error;

pub use entity::ProfileAction;
pub use error::*;

use crate::clients::ProfileClient;
use crate::config::SystemConfig;
use crate::framework::TableActor;
use crate::model::Profile;

/// Creates the Profile table actor and its client.
pub fn new(config: &SystemConfig) -> (TableActor<Profile>, ProfileClient) {
    let (actor, generic_client) = TableActor::new(config.channel_buffer, config.feed_capacity);
    (actor, ProfileClient::new(generic_client))
}
