//! # Table Store
//!
//! The generic engine behind every table: an actor per table that owns its rows, a cloneable
//! client, a small query language and a realtime change feed.
//!
//! - [`Record`]: what a row type implements.
//! - [`TableActor`] / [`TableClient`]: server and client halves of a table.
//! - [`Query`]: `select(filter, order, limit)`.
//! - [`Subscription`]: filtered change feed.
//! - [`DomainClient`]: shared surface of the typed per-table clients.
//! - [`mock`]: scripted tables for tests.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod query;
pub mod realtime;

pub use actor::TableActor;
pub use client::TableClient;
pub use client_trait::DomainClient;
pub use entity::Record;
pub use error::StoreError;
pub use message::{Response, TableRequest};
pub use query::{filter, Comparator, Filter, Query};
pub use realtime::{Change, ChangeKind, Feed, Subscription};
