//! # DomainClient Trait
//!
//! Common interface for the per-table clients (`OrderClient`, `DishClient`, …). A domain client
//! wraps a [`TableClient`] and maps [`StoreError`] into its own error type; in exchange it gets
//! `get`, `select`, `delete` and `subscribe` for free.

use crate::framework::{ChangeKind, Filter, Query, Record, StoreError, Subscription, TableClient};
use async_trait::async_trait;

#[async_trait]
pub trait DomainClient<T: Record>: Send + Sync {
    /// The table-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic `TableClient`.
    fn inner(&self) -> &TableClient<T>;

    /// Map store errors to the table-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a row by id.
    #[tracing::instrument(skip(self), fields(table = T::TABLE))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self), fields(table = T::TABLE))]
    async fn select(&self, query: Query<T>) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().select(query).await.map_err(Self::map_error)
    }

    /// Delete a row by id.
    #[tracing::instrument(skip(self), fields(table = T::TABLE))]
    async fn delete(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    fn subscribe(&self, filter: Option<Filter<T>>, events: &[ChangeKind]) -> Subscription<T> {
        self.inner().subscribe(filter, events)
    }
}
