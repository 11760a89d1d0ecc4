//! # Table Actor
//!
//! `TableActor<T>` is the server half of a table. It owns the rows of one [`Record`] type and
//! processes [`TableRequest`]s one at a time, so row state needs no locks and writes to the same
//! table are totally ordered.
//!
//! ## Usage Pattern
//!
//! 1.  **Create**: `TableActor::new()` returns the actor and its [`TableClient`].
//! 2.  **Wire**: pass the row's dependencies (other clients) to `actor.run(context)`.
//! 3.  **Run**: spawn the run loop on the runtime.
//!
//! ```rust
//! use async_trait::async_trait;
//! use dishpatch::framework::{Record, TableActor};
//! use uuid::Uuid;
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: Uuid, text: String }
//! #[derive(Debug, thiserror::Error)]
//! #[error("note error")]
//! struct NoteError;
//!
//! #[async_trait]
//! impl Record for Note {
//!     const TABLE: &'static str = "notes";
//!     type Id = Uuid;
//!     type Create = String;
//!     type Update = String;
//!     type Action = ();
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = NoteError;
//!
//!     fn id(&self) -> &Uuid { &self.id }
//!     fn from_create_params(id: Uuid, text: String) -> Result<Self, NoteError> {
//!         Ok(Self { id, text })
//!     }
//!     async fn on_update(&mut self, text: String, _: &()) -> Result<(), NoteError> {
//!         self.text = text;
//!         Ok(())
//!     }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), NoteError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = TableActor::<Note>::new(8, 16);
//!     tokio::spawn(actor.run(()));
//!     let note = client.insert("hello".to_string()).await.unwrap();
//!     assert_eq!(note.text, "hello");
//! }
//! ```
//!
//! ## Operations
//!
//! * **Insert**: mint or take the preassigned id, build the row, enforce the primary and unique
//!   keys, run `on_create`, commit, publish `Insert`.
//! * **InsertMany**: the same for every row of the batch; nothing is committed unless every row
//!   passes.
//! * **Select**: apply the [`Query`](super::Query) to a snapshot of the rows.
//! * **Update** / **Action**: run the hook on a copy, re-check the unique key, commit, publish
//!   `Update`.
//! * **Delete**: run `on_delete`, remove, publish `Delete`.

use crate::framework::client::TableClient;
use crate::framework::entity::Record;
use crate::framework::error::StoreError;
use crate::framework::message::TableRequest;
use crate::framework::realtime::Change;
use std::collections::{HashMap, HashSet};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct TableActor<T: Record> {
    receiver: mpsc::Receiver<TableRequest<T>>,
    changes: broadcast::Sender<Change<T>>,
    rows: HashMap<T::Id, T>,
    unique: HashMap<String, T::Id>,
}

fn rejected<E: std::error::Error + Send + Sync + 'static>(e: E) -> StoreError {
    StoreError::Rejected(Box::new(e))
}

impl<T: Record> TableActor<T> {
    /// Creates a table actor and its client.
    ///
    /// * `buffer_size` - capacity of the request channel.
    /// * `feed_capacity` - how many change events a slow subscriber may fall behind before it is
    ///   told to resync.
    pub fn new(buffer_size: usize, feed_capacity: usize) -> (Self, TableClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (changes, _) = broadcast::channel(feed_capacity.max(1));
        let actor = Self {
            receiver,
            changes: changes.clone(),
            rows: HashMap::new(),
            unique: HashMap::new(),
        };
        (actor, TableClient::new(sender, changes))
    }

    /// Runs the request loop until every client is dropped.
    pub async fn run(mut self, context: T::Context) {
        let table = T::TABLE;
        info!(table, "Table started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                TableRequest::Insert { params, respond_to } => {
                    debug!(table, ?params, "Insert");
                    let result = self
                        .insert_rows(vec![params], &context)
                        .await
                        .and_then(|rows| {
                            rows.into_iter()
                                .next()
                                .ok_or_else(|| StoreError::NotFound(table.to_string()))
                        });
                    let _ = respond_to.send(result);
                }
                TableRequest::InsertMany { rows, respond_to } => {
                    debug!(table, count = rows.len(), "InsertMany");
                    let result = self.insert_rows(rows, &context).await;
                    let _ = respond_to.send(result);
                }
                TableRequest::Get { id, respond_to } => {
                    let row = self.rows.get(&id).cloned();
                    debug!(table, %id, found = row.is_some(), "Get");
                    let _ = respond_to.send(Ok(row));
                }
                TableRequest::Select { query, respond_to } => {
                    let rows = query.apply(self.rows.values());
                    debug!(table, ?query, returned = rows.len(), "Select");
                    let _ = respond_to.send(Ok(rows));
                }
                TableRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(table, %id, ?update, "Update");
                    let result = match self.rows.get(&id).cloned() {
                        Some(mut row) => match row.on_update(update, &context).await {
                            Ok(()) => self.commit_update(row),
                            Err(e) => {
                                warn!(table, %id, error = %e, "Update failed");
                                Err(rejected(e))
                            }
                        },
                        None => {
                            warn!(table, %id, "Not found");
                            Err(StoreError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                TableRequest::Delete { id, respond_to } => {
                    debug!(table, %id, "Delete");
                    let result = match self.rows.get(&id).cloned() {
                        Some(row) => match row.on_delete(&context).await {
                            Ok(()) => self
                                .remove(&id)
                                .ok_or_else(|| StoreError::NotFound(id.to_string())),
                            Err(e) => {
                                warn!(table, %id, error = %e, "on_delete failed");
                                Err(rejected(e))
                            }
                        },
                        None => {
                            warn!(table, %id, "Not found");
                            Err(StoreError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                TableRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(table, %id, ?action, "Action");
                    let result = match self.rows.get(&id).cloned() {
                        Some(mut row) => match row.handle_action(action, &context).await {
                            Ok(outcome) => self.commit_update(row).map(|_| outcome),
                            Err(e) => {
                                warn!(table, %id, error = %e, "Action failed");
                                Err(rejected(e))
                            }
                        },
                        None => {
                            warn!(table, %id, "Not found");
                            Err(StoreError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(table, size = self.rows.len(), "Shutdown");
    }

    /// Builds, validates and commits a batch of rows. Either all of them land or none do.
    async fn insert_rows(
        &mut self,
        batch: Vec<T::Create>,
        context: &T::Context,
    ) -> Result<Vec<T>, StoreError> {
        let table = T::TABLE;
        let mut staged: Vec<T> = Vec::with_capacity(batch.len());
        let mut staged_ids = HashSet::new();
        let mut staged_keys = HashSet::new();

        for params in batch {
            let id = T::preassigned_id(&params).unwrap_or_else(|| T::Id::from(Uuid::new_v4()));
            if self.rows.contains_key(&id) || !staged_ids.insert(id.clone()) {
                warn!(table, %id, "Duplicate id");
                return Err(StoreError::Conflict(id.to_string()));
            }
            let mut row = T::from_create_params(id, params).map_err(|e| {
                warn!(table, error = %e, "Insert rejected");
                rejected(e)
            })?;
            if let Some(key) = row.unique_key() {
                if self.unique.contains_key(&key) || !staged_keys.insert(key.clone()) {
                    warn!(table, %key, "Duplicate unique key");
                    return Err(StoreError::Conflict(key));
                }
            }
            if let Err(e) = row.on_create(context).await {
                warn!(table, id = %row.id(), error = %e, "on_create failed");
                return Err(rejected(e));
            }
            staged.push(row);
        }

        for row in &staged {
            let id = row.id().clone();
            if let Some(key) = row.unique_key() {
                self.unique.insert(key, id.clone());
            }
            self.rows.insert(id.clone(), row.clone());
            info!(table, %id, size = self.rows.len(), "Inserted");
            self.publish(Change::Insert { new: row.clone() });
        }
        Ok(staged)
    }

    fn commit_update(&mut self, row: T) -> Result<T, StoreError> {
        let table = T::TABLE;
        let id = row.id().clone();
        let old = match self.rows.get(&id) {
            Some(old) => old.clone(),
            None => return Err(StoreError::NotFound(id.to_string())),
        };

        let old_key = old.unique_key();
        let new_key = row.unique_key();
        if new_key != old_key {
            if let Some(key) = &new_key {
                if self.unique.get(key).is_some_and(|owner| owner != &id) {
                    warn!(table, %id, %key, "Duplicate unique key");
                    return Err(StoreError::Conflict(key.clone()));
                }
            }
            if let Some(key) = old_key {
                self.unique.remove(&key);
            }
            if let Some(key) = new_key {
                self.unique.insert(key, id.clone());
            }
        }

        self.rows.insert(id.clone(), row.clone());
        info!(table, %id, "Updated");
        self.publish(Change::Update {
            old,
            new: row.clone(),
        });
        Ok(row)
    }

    fn remove(&mut self, id: &T::Id) -> Option<T> {
        let old = self.rows.remove(id)?;
        if let Some(key) = old.unique_key() {
            self.unique.remove(&key);
        }
        info!(table = T::TABLE, %id, size = self.rows.len(), "Deleted");
        self.publish(Change::Delete { old: old.clone() });
        Some(old)
    }

    fn publish(&self, change: Change<T>) {
        // no subscribers is not an error
        let _ = self.changes.send(change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{ChangeKind, Feed, Query};
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Slot {
        id: Uuid,
        code: String,
        taken: bool,
    }

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum SlotError {
        #[error("empty code")]
        EmptyCode,
        #[error("already taken")]
        AlreadyTaken,
    }

    #[derive(Debug)]
    enum SlotAction {
        Take,
    }

    #[async_trait]
    impl Record for Slot {
        const TABLE: &'static str = "slots";
        type Id = Uuid;
        type Create = String;
        type Update = String;
        type Action = SlotAction;
        type ActionResult = ();
        type Context = ();
        type Error = SlotError;

        fn id(&self) -> &Uuid {
            &self.id
        }

        fn unique_key(&self) -> Option<String> {
            Some(self.code.clone())
        }

        fn from_create_params(id: Uuid, code: String) -> Result<Self, SlotError> {
            if code.is_empty() {
                return Err(SlotError::EmptyCode);
            }
            Ok(Self {
                id,
                code,
                taken: false,
            })
        }

        async fn on_update(&mut self, code: String, _: &()) -> Result<(), SlotError> {
            self.code = code;
            Ok(())
        }

        async fn handle_action(&mut self, action: SlotAction, _: &()) -> Result<(), SlotError> {
            match action {
                SlotAction::Take if self.taken => Err(SlotError::AlreadyTaken),
                SlotAction::Take => {
                    self.taken = true;
                    Ok(())
                }
            }
        }
    }

    fn spawn_table() -> TableClient<Slot> {
        let (actor, client) = TableActor::<Slot>::new(8, 16);
        tokio::spawn(actor.run(()));
        client
    }

    #[tokio::test]
    async fn test_insert_get_select() {
        let client = spawn_table();
        let a = client.insert("a".into()).await.unwrap();
        client.insert("b".into()).await.unwrap();

        assert_eq!(client.get(a.id).await.unwrap(), Some(a.clone()));
        let codes: Vec<_> = client
            .select(Query::all().order_by(|x: &Slot, y: &Slot| x.code.cmp(&y.code)))
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.code)
            .collect();
        assert_eq!(codes, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_unique_key_conflict() {
        let client = spawn_table();
        client.insert("dup".into()).await.unwrap();
        let err = client.insert("dup".into()).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_insert_many_is_all_or_nothing() {
        let client = spawn_table();
        let err = client
            .insert_many(vec!["x".into(), String::new()])
            .await
            .unwrap_err();
        assert_eq!(err.downcast_rejection::<SlotError>(), Some(&SlotError::EmptyCode));
        assert!(client.select(Query::all()).await.unwrap().is_empty());

        let rows = client.insert_many(vec!["x".into(), "y".into()]).await.unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_action_leaves_row_untouched() {
        let client = spawn_table();
        let slot = client.insert("s".into()).await.unwrap();

        client.perform_action(slot.id, SlotAction::Take).await.unwrap();
        let err = client
            .perform_action(slot.id, SlotAction::Take)
            .await
            .unwrap_err();
        assert_eq!(err.downcast_rejection::<SlotError>(), Some(&SlotError::AlreadyTaken));
        assert!(client.get(slot.id).await.unwrap().unwrap().taken);
    }

    #[tokio::test]
    async fn test_changes_are_published_to_matching_subscribers() {
        let client = spawn_table();
        let mut all = client.subscribe(None, &ChangeKind::ALL);
        let mut only_b = client.subscribe(
            Some(crate::framework::filter(|s: &Slot| s.code == "b")),
            &[ChangeKind::Insert],
        );

        let a = client.insert("a".into()).await.unwrap();
        client.insert("b".into()).await.unwrap();
        client.update(a.id, "a2".into()).await.unwrap();
        client.delete(a.id).await.unwrap();

        let kinds: Vec<_> = (0..4)
            .map(|_| match all.try_recv() {
                Some(Feed::Change(c)) => c.kind(),
                other => panic!("unexpected feed item: {other:?}"),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![ChangeKind::Insert, ChangeKind::Insert, ChangeKind::Update, ChangeKind::Delete]
        );

        match only_b.try_recv() {
            Some(Feed::Change(Change::Insert { new })) => assert_eq!(new.code, "b"),
            other => panic!("unexpected feed item: {other:?}"),
        }
        assert!(only_b.try_recv().is_none());
    }

    #[tokio::test]
    async fn test_missing_row_is_not_found() {
        let client = spawn_table();
        let err = client.update(Uuid::new_v4(), "z".into()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
