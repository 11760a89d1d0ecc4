//! # Realtime Change Feed
//!
//! Every committed write on a table is published as a [`Change`] on the table's broadcast
//! channel. A [`Subscription`] narrows that feed to a row filter and a set of event kinds.
//!
//! For updates the filter is checked against both the old and the new row, so a subscriber
//! also sees the row that just *left* its slice (e.g. an order that stops being `ready`).
//!
//! A subscriber that falls more than the channel capacity behind gets [`Feed::Resync`] and
//! should reload its slice with a `select`.

use crate::framework::entity::Record;
use crate::framework::query::Filter;
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

impl ChangeKind {
    pub const ALL: [ChangeKind; 3] = [ChangeKind::Insert, ChangeKind::Update, ChangeKind::Delete];
}

/// A committed write.
#[derive(Debug, Clone)]
pub enum Change<T> {
    Insert { new: T },
    Update { old: T, new: T },
    Delete { old: T },
}

impl<T> Change<T> {
    pub fn kind(&self) -> ChangeKind {
        match self {
            Change::Insert { .. } => ChangeKind::Insert,
            Change::Update { .. } => ChangeKind::Update,
            Change::Delete { .. } => ChangeKind::Delete,
        }
    }

    /// The row after the write, `None` for deletes.
    pub fn new_row(&self) -> Option<&T> {
        match self {
            Change::Insert { new } | Change::Update { new, .. } => Some(new),
            Change::Delete { .. } => None,
        }
    }

    /// The row before the write, `None` for inserts.
    pub fn old_row(&self) -> Option<&T> {
        match self {
            Change::Update { old, .. } | Change::Delete { old } => Some(old),
            Change::Insert { .. } => None,
        }
    }
}

/// What a subscriber receives.
#[derive(Debug, Clone)]
pub enum Feed<T> {
    Change(Change<T>),
    /// Events were dropped; the subscriber must reload.
    Resync,
}

/// A filtered view on a table's change feed. Dropping it unsubscribes.
pub struct Subscription<T: Record> {
    receiver: broadcast::Receiver<Change<T>>,
    filter: Option<Filter<T>>,
    events: Vec<ChangeKind>,
}

impl<T: Record> Subscription<T> {
    pub(crate) fn new(
        receiver: broadcast::Receiver<Change<T>>,
        filter: Option<Filter<T>>,
        events: &[ChangeKind],
    ) -> Self {
        Self {
            receiver,
            filter,
            events: events.to_vec(),
        }
    }

    fn wants(&self, change: &Change<T>) -> bool {
        if !self.events.contains(&change.kind()) {
            return false;
        }
        match &self.filter {
            None => true,
            Some(f) => change.new_row().is_some_and(|r| f(r)) || change.old_row().is_some_and(|r| f(r)),
        }
    }

    /// Waits for the next matching event. `None` once the table has shut down.
    pub async fn recv(&mut self) -> Option<Feed<T>> {
        loop {
            match self.receiver.recv().await {
                Ok(change) if self.wants(&change) => return Some(Feed::Change(change)),
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(table = T::TABLE, skipped, "Subscriber lagged");
                    return Some(Feed::Resync);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Returns the next matching event already queued, without waiting.
    pub fn try_recv(&mut self) -> Option<Feed<T>> {
        loop {
            match self.receiver.try_recv() {
                Ok(change) if self.wants(&change) => return Some(Feed::Change(change)),
                Ok(_) => continue,
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(table = T::TABLE, skipped, "Subscriber lagged");
                    return Some(Feed::Resync);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    pub fn unsubscribe(self) {}
}

impl<T: Record> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("table", &T::TABLE)
            .field("filtered", &self.filter.is_some())
            .field("events", &self.events)
            .finish()
    }
}
