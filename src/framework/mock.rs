//! # Mock Tables
//!
//! `MockTable<T>` hands out a real [`TableClient<T>`] whose requests are answered from a queue
//! of expectations instead of a running table. Use it to test a row type's hooks (e.g. an order
//! writing its items in `on_create`) in isolation from the tables it depends on.
//!
//! | | MockTable | Real `TableActor` |
//! |---|---|---|
//! | **State** | None, answers are scripted | Real rows |
//! | **Error injection** | `return_err` | Needs a row that fails its hook |
//! | **Use case** | Testing code *around* a client | Testing the table or the full system |
//!
//! Expectations are consumed in order; a request that does not match the next expectation
//! panics the mock task, which surfaces as [`StoreError::ActorDropped`] in the caller.
//!
//! ```rust,ignore
//! let mut tracking = MockTable::<DeliveryTracking>::new();
//! tracking.expect_insert().return_err(StoreError::ActorClosed);
//! let client = TrackingClient::new(tracking.client());
//! // ... drive the code under test ...
//! tracking.verify();
//! ```
//!
//! For request-level assertions use [`create_mock_client`] together with the `expect_*`
//! receivers, which hand back the raw request payload and its responder.

use crate::framework::{Change, Query, Record, Response, StoreError, TableClient, TableRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{broadcast, mpsc};

enum Expectation<T: Record> {
    Insert(Result<T, StoreError>),
    InsertMany(Result<Vec<T>, StoreError>),
    Get(Result<Option<T>, StoreError>),
    Select(Result<Vec<T>, StoreError>),
    Update(Result<T, StoreError>),
    Delete(Result<T, StoreError>),
    Action(Result<T::ActionResult, StoreError>),
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

pub struct MockTable<T: Record> {
    client: TableClient<T>,
    changes: broadcast::Sender<Change<T>>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn answer<R>(respond_to: Response<R>, response: Result<R, StoreError>) {
    let _ = respond_to.send(response);
}

impl<T: Record> MockTable<T> {
    /// Creates a mock with no expectations. Must be called inside a tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<TableRequest<T>>(100);
        let (changes, _) = broadcast::channel(64);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .pop_front();
                match (request, next) {
                    (TableRequest::Insert { respond_to, .. }, Some(Expectation::Insert(r))) => {
                        answer(respond_to, r)
                    }
                    (
                        TableRequest::InsertMany { respond_to, .. },
                        Some(Expectation::InsertMany(r)),
                    ) => answer(respond_to, r),
                    (TableRequest::Get { respond_to, .. }, Some(Expectation::Get(r))) => {
                        answer(respond_to, r)
                    }
                    (TableRequest::Select { respond_to, .. }, Some(Expectation::Select(r))) => {
                        answer(respond_to, r)
                    }
                    (TableRequest::Update { respond_to, .. }, Some(Expectation::Update(r))) => {
                        answer(respond_to, r)
                    }
                    (TableRequest::Delete { respond_to, .. }, Some(Expectation::Delete(r))) => {
                        answer(respond_to, r)
                    }
                    (TableRequest::Action { respond_to, .. }, Some(Expectation::Action(r))) => {
                        answer(respond_to, r)
                    }
                    (request, _) => {
                        panic!("Unexpected request on mock {} table: {:?}", T::TABLE, request)
                    }
                }
            }
        });

        Self {
            client: TableClient::new(sender, changes.clone()),
            changes,
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> TableClient<T> {
        self.client.clone()
    }

    /// Publishes a change to the mock's subscribers.
    pub fn emit(&self, change: Change<T>) {
        let _ = self.changes.send(change);
    }

    fn expect<R>(&mut self, wrap: fn(Result<R, StoreError>) -> Expectation<T>) -> Expect<T, R> {
        Expect {
            wrap,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_insert(&mut self) -> Expect<T, T> {
        self.expect(Expectation::Insert)
    }

    pub fn expect_insert_many(&mut self) -> Expect<T, Vec<T>> {
        self.expect(Expectation::InsertMany)
    }

    pub fn expect_get(&mut self) -> Expect<T, Option<T>> {
        self.expect(Expectation::Get)
    }

    pub fn expect_select(&mut self) -> Expect<T, Vec<T>> {
        self.expect(Expectation::Select)
    }

    pub fn expect_update(&mut self) -> Expect<T, T> {
        self.expect(Expectation::Update)
    }

    pub fn expect_delete(&mut self) -> Expect<T, T> {
        self.expect(Expectation::Delete)
    }

    pub fn expect_action(&mut self) -> Expect<T, T::ActionResult> {
        self.expect(Expectation::Action)
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        if remaining != 0 {
            panic!("Not all expectations on mock {} were met. {remaining} remaining", T::TABLE);
        }
    }
}

/// Pending expectation; finish it with `return_ok` or `return_err`.
pub struct Expect<T: Record, R> {
    wrap: fn(Result<R, StoreError>) -> Expectation<T>,
    expectations: Queue<T>,
}

impl<T: Record, R> Expect<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back((self.wrap)(response));
    }
}

// =============================================================================
// RAW RECEIVER HELPERS
// =============================================================================

/// Creates a client whose requests land on the returned receiver.
pub fn create_mock_client<T: Record>(
    buffer_size: usize,
) -> (TableClient<T>, mpsc::Receiver<TableRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (changes, _) = broadcast::channel(16);
    (TableClient::new(sender, changes), receiver)
}

pub async fn expect_insert<T: Record>(
    receiver: &mut mpsc::Receiver<TableRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(TableRequest::Insert { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

pub async fn expect_select<T: Record>(
    receiver: &mut mpsc::Receiver<TableRequest<T>>,
) -> Option<(Query<T>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(TableRequest::Select { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

pub async fn expect_update<T: Record>(
    receiver: &mut mpsc::Receiver<TableRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(TableRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

pub async fn expect_action<T: Record>(
    receiver: &mut mpsc::Receiver<TableRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(TableRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
