//! # Record Trait
//!
//! The `Record` trait is the contract every table row type (Profile, Order, Dish, …) implements
//! to be stored by a [`TableActor`](super::TableActor). It names the row's id, its insert and
//! patch payloads, its custom actions and the context (other table clients) injected into the
//! lifecycle hooks.
//!
//! # Provided Methods (Hooks)
//! - [`Record::preassigned_id`]: lets a row reuse an id minted elsewhere (e.g. a profile reuses
//!   the account id). Defaults to a fresh v4 uuid.
//! - [`Record::unique_key`]: a secondary unique constraint enforced by the table.
//! - [`Record::on_create`], [`Record::on_delete`]: default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use uuid::Uuid;

/// A row type managed by a `TableActor`.
///
/// # Async & Context
/// Hooks are async so a row can call other tables (e.g. an order writes its items from
/// `on_create`). The `Context` is handed to `run()`, so dependencies are bound late.
///
/// # Atomicity
/// The table applies `on_update` and `handle_action` to a *copy* of the stored row and only
/// commits the copy when the hook succeeds. A failing hook therefore never leaves a half-applied
/// row behind.
#[async_trait]
pub trait Record: Clone + Debug + Send + Sync + 'static {
    /// Table name used in logs and change events.
    const TABLE: &'static str;

    /// Primary key. Fresh keys are minted from a v4 uuid.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<Uuid>;

    /// Insert payload.
    type Create: Send + Sync + Debug;

    /// Patch payload for `update`.
    type Update: Send + Sync + Debug;

    /// Row-specific operations (e.g. order status transitions).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the hooks. Use `()` if none are needed.
    type Context: Send + Sync;

    /// One error enum per table.
    type Error: std::error::Error + Send + Sync + 'static;

    fn id(&self) -> &Self::Id;

    /// Id to use instead of a freshly generated one.
    fn preassigned_id(_params: &Self::Create) -> Option<Self::Id> {
        None
    }

    /// Secondary unique key. Two rows of the same table may never share one.
    fn unique_key(&self) -> Option<String> {
        None
    }

    /// Build the row from its id and payload. Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Runs before the row is committed. An error aborts the insert.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before the row is removed. An error keeps the row.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
