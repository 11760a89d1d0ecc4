//! # Dishpatch
//!
//! > **Food ordering for customers, restaurants, delivery agents and admins, on an actor-backed
//! > table store.**
//!
//! Every table (profiles, restaurants, dishes, orders, …) is a Tokio task that owns its rows and
//! handles requests one at a time. Typed clients hide the message passing, and each table
//! publishes its committed writes on a change feed that the dashboards follow.
//!
//! ## Core Concepts
//!
//! ### Orders are state machines
//! `pending → accepted → preparing → ready → picked_up → delivered`, with `cancelled` reachable
//! from `pending` only. Every transition is an [`OrderAction`](order_actor::OrderAction) applied
//! inside the order table actor, which checks the caller's role and ownership before touching
//! the row. Claiming a `ready` order issues a 6-digit delivery code; the customer enters it to
//! complete the delivery.
//!
//! ### Checkout is priced up front
//! [`pricing`] turns cart lines and an optional coupon into a [`Quote`](pricing::Quote). The
//! order and all its items are written together: items go in from the order's `on_create` hook
//! and the header is committed only if they succeed.
//!
//! ### Dashboards stay live
//! A [`LiveOrders`](views::LiveOrders) index loads the orders a role may see once and then
//! applies change events to it. A subscriber that falls behind reloads.
//!
//! ## Module Tour
//!
//! ### 1. The Store ([`framework`])
//! - **Role**: the generic [`TableActor`](framework::TableActor), its client, queries and the
//!   realtime feed.
//! - **Key items**: [`Record`](framework::Record), [`TableClient`](framework::TableClient),
//!   [`Subscription`](framework::Subscription), [`mock`](framework::mock).
//!
//! ### 2. The Tables ([`profile_actor`], [`restaurant_actor`], [`dish_actor`], [`coupon_actor`],
//! [`order_actor`], [`order_item_actor`], [`tracking_actor`])
//! - **Role**: one [`Record`](framework::Record) impl and error type per table. Row types live
//!   in [`model`].
//!
//! ### 3. The Interface ([`clients`], [`auth`])
//! - **Role**: typed clients per table and the [`SessionProvider`](auth::SessionProvider) for
//!   sign-up and sign-in.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: starts and wires every table, hands out clients and shuts down.
//! - **Key items**: [`FoodSystem`](lifecycle::FoodSystem), [`Backend`](lifecycle::Backend).
//!
//! ### 5. The Dashboards ([`views`])
//! - **Role**: customer, restaurant, delivery and admin controllers, picked by
//!   [`Dashboard::open`](views::Dashboard::open).
//!
//! ## Quick Start
//!
//! ```bash
//! # Walk one order from sign-up to delivery
//! RUST_LOG=info cargo run
//!
//! cargo test
//! ```

pub mod auth;
pub mod clients;
pub mod config;
pub mod coupon_actor;
pub mod dish_actor;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod order_item_actor;
pub mod pricing;
pub mod profile_actor;
pub mod restaurant_actor;
pub mod tracking_actor;
pub mod views;
