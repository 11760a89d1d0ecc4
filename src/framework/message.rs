//! # Table Requests
//!
//! Messages sent from a [`TableClient`](super::TableClient) to its
//! [`TableActor`](super::TableActor). Besides the CRUD + Action set, a table
//! answers `Select` queries and multi-row `InsertMany` writes that commit all rows or none.

use crate::framework::entity::Record;
use crate::framework::error::StoreError;
use crate::framework::query::Query;
use tokio::sync::oneshot;

/// One-shot response channel used by table actors.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

#[derive(Debug)]
pub enum TableRequest<T: Record> {
    Insert {
        params: T::Create,
        respond_to: Response<T>,
    },
    InsertMany {
        rows: Vec<T::Create>,
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Select {
        query: Query<T>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
