//! # Table Client
//!
//! The cloneable handle to a [`TableActor`](super::TableActor): an mpsc sender for requests
//! and the table's broadcast sender for realtime subscriptions.

use crate::framework::entity::Record;
use crate::framework::error::StoreError;
use crate::framework::message::TableRequest;
use crate::framework::query::{Filter, Query};
use crate::framework::realtime::{Change, ChangeKind, Subscription};
use tokio::sync::{broadcast, mpsc, oneshot};

pub struct TableClient<T: Record> {
    sender: mpsc::Sender<TableRequest<T>>,
    changes: broadcast::Sender<Change<T>>,
}

impl<T: Record> Clone for TableClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            changes: self.changes.clone(),
        }
    }
}

impl<T: Record> TableClient<T> {
    pub fn new(
        sender: mpsc::Sender<TableRequest<T>>,
        changes: broadcast::Sender<Change<T>>,
    ) -> Self {
        Self { sender, changes }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> TableRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn insert(&self, params: T::Create) -> Result<T, StoreError> {
        self.request(|respond_to| TableRequest::Insert { params, respond_to })
            .await
    }

    /// Inserts every row or none of them.
    pub async fn insert_many(&self, rows: Vec<T::Create>) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| TableRequest::InsertMany { rows, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| TableRequest::Get { id, respond_to })
            .await
    }

    pub async fn select(&self, query: Query<T>) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| TableRequest::Select { query, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, StoreError> {
        self.request(|respond_to| TableRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    /// Removes a row and returns it.
    pub async fn delete(&self, id: T::Id) -> Result<T, StoreError> {
        self.request(|respond_to| TableRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, StoreError> {
        self.request(|respond_to| TableRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    /// Subscribes to committed writes. Only events issued after this call are delivered.
    pub fn subscribe(&self, filter: Option<Filter<T>>, events: &[ChangeKind]) -> Subscription<T> {
        Subscription::new(self.changes.subscribe(), filter, events)
    }
}
