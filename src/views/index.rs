//! # Live Order Index
//!
//! Each dashboard shows a slice of the orders table. [`LiveOrders`] loads that slice once and
//! then follows the table's change feed, applying every event to an [`OrderIndex`] keyed by
//! order id:
//!
//! - the new row is in scope: upsert it
//! - otherwise (deleted, or moved out of scope): remove it
//!
//! A lagged feed yields a resync marker, which triggers one full reload.

use crate::clients::OrderClient;
use crate::framework::{Change, ChangeKind, DomainClient, Feed, Filter, Subscription};
use crate::model::{Order, OrderId};
use crate::order_actor::OrderError;
use std::collections::HashMap;
use tracing::{debug, info};

/// Orders by id.
#[derive(Debug, Clone, Default)]
pub struct OrderIndex {
    rows: HashMap<OrderId, Order>,
}

impl OrderIndex {
    pub fn new(rows: impl IntoIterator<Item = Order>) -> Self {
        Self {
            rows: rows.into_iter().map(|o| (o.id, o)).collect(),
        }
    }

    pub fn upsert(&mut self, order: Order) {
        self.rows.insert(order.id, order);
    }

    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        self.rows.remove(&id)
    }

    /// Applies one change event under `scope`.
    pub fn apply(&mut self, change: &Change<Order>, scope: &Filter<Order>) {
        match change.new_row() {
            Some(new) if scope(new) => self.upsert(new.clone()),
            Some(new) => {
                self.remove(new.id);
            }
            None => {
                if let Some(old) = change.old_row() {
                    self.remove(old.id);
                }
            }
        }
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.rows.get(&id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.rows.values()
    }

    /// Every order, newest first.
    pub fn newest_first(&self) -> Vec<Order> {
        let mut rows: Vec<Order> = self.rows.values().cloned().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }
}

/// An [`OrderIndex`] kept current from the orders change feed.
pub struct LiveOrders {
    orders: OrderClient,
    scope: Filter<Order>,
    subscription: Subscription<Order>,
    index: OrderIndex,
}

impl LiveOrders {
    /// Subscribes, then loads the slice. Subscribing first means a write committed during the
    /// load still arrives as an event; applying it again is harmless.
    pub async fn open(orders: OrderClient, scope: Filter<Order>) -> Result<Self, OrderError> {
        let subscription = orders.subscribe(Some(scope.clone()), &ChangeKind::ALL);
        let index = OrderIndex::new(orders.scoped(scope.clone()).await?);
        debug!(loaded = index.len(), "Order feed opened");
        Ok(Self {
            orders,
            scope,
            subscription,
            index,
        })
    }

    pub fn index(&self) -> &OrderIndex {
        &self.index
    }

    /// The slice, newest first.
    pub fn orders(&self) -> Vec<Order> {
        self.index.newest_first()
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.index.get(id)
    }

    /// Replaces the index with a fresh load.
    pub async fn reload(&mut self) -> Result<(), OrderError> {
        self.index = OrderIndex::new(self.orders.scoped(self.scope.clone()).await?);
        info!(loaded = self.index.len(), "Order feed reloaded");
        Ok(())
    }

    /// Applies every event already queued and returns how many were applied. Never waits.
    pub async fn sync(&mut self) -> Result<usize, OrderError> {
        let mut applied = 0;
        while let Some(feed) = self.subscription.try_recv() {
            match feed {
                Feed::Change(change) => self.index.apply(&change, &self.scope),
                Feed::Resync => self.reload().await?,
            }
            applied += 1;
        }
        Ok(applied)
    }

    /// Waits for the next event and applies it. Returns what was applied, or `None` once the
    /// orders table has stopped.
    pub async fn next_change(&mut self) -> Result<Option<Feed<Order>>, OrderError> {
        let Some(feed) = self.subscription.recv().await else {
            return Ok(None);
        };
        match &feed {
            Feed::Change(change) => self.index.apply(change, &self.scope),
            Feed::Resync => self.reload().await?,
        }
        Ok(Some(feed))
    }
}
