//! # Authentication
//!
//! Email/password accounts and the per-client session.
//!
//! - [`account`]: the `accounts` table (email + argon2 hash). Never exposed to views.
//! - [`password`]: hashing and verification.
//! - [`session`]: [`SessionProvider`], which signs users up, in and out.
//!
//! Sign-up writes the account first and then a [`Profile`](crate::model::Profile) with the same
//! id; the profile carries the role that picks the dashboard.

pub mod account;
pub mod error;
pub mod password;
pub mod session;

pub use account::{Account, AccountClient};
pub use error::AuthError;
pub use session::{Session, SessionProvider, SessionState, SignUp};

use crate::config::SystemConfig;
use crate::framework::TableActor;

/// Creates the Account table actor and its client.
pub fn new(config: &SystemConfig) -> (TableActor<Account>, AccountClient) {
    let (actor, generic_client) = TableActor::new(config.channel_buffer, config.feed_capacity);
    (actor, AccountClient::new(generic_client))
}
