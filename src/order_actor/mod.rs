//! # Order Table
//!
//! Orders are the one row type with real behavior: placement, the status lifecycle and OTP
//! delivery confirmation all happen inside the order table actor.
//!
//! ## Structure
//!
//! - [`entity`]: [`Record`](crate::framework::Record) impl and the [`OrderContext`] it depends on
//! - [`actions`]: [`OrderAction`], one variant per lifecycle transition
//! - [`otp`]: delivery code generation and matching
//! - [`error`]: [`OrderError`]
//!
//! ## Placement
//!
//! `on_create` checks the restaurant and writes every order line with one `insert_many`. The
//! header is committed only after that write succeeds, so there is never an order without items.
//!
//! ## Claims
//!
//! The table actor applies actions one at a time. Two agents claiming the same `ready` order are
//! therefore serialized: the first wins and the second sees `picked_up` and gets
//! [`OrderError::InvalidTransition`].
//!
//! ## Dependencies
//!
//! Injected at `run()` through [`OrderContext`]: the restaurant, order item and tracking
//! clients.

pub mod actions;
pub mod entity;
pub mod error;
pub mod otp;

pub use actions::*;
pub use entity::OrderContext;
pub use error::*;

use crate::clients::OrderClient;
use crate::config::SystemConfig;
use crate::framework::TableActor;
use crate::model::Order;

/// Creates the Order table actor and its client. Dependencies are passed to `run()`.
pub fn new(config: &SystemConfig) -> (TableActor<Order>, OrderClient) {
    let (actor, generic_client) = TableActor::new(config.channel_buffer, config.feed_capacity);
    (actor, OrderClient::new(generic_client))
}
