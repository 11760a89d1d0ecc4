//! Admin dashboard: platform totals and the latest orders.

use crate::auth::Session;
use crate::framework::filter;
use crate::lifecycle::Backend;
use crate::model::{Order, OrderStatus, PaymentStatus, Role};
use crate::views::{require_role, LiveOrders, OrderIndex, ViewError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_orders: usize,
    /// Sum of `final_amount` over paid orders.
    pub total_revenue: f64,
    pub total_customers: usize,
    pub total_restaurants: usize,
    /// `pending` through `picked_up`.
    pub active_orders: usize,
    pub completed_orders: usize,
}

impl AdminStats {
    fn with_orders(mut self, index: &OrderIndex) -> Self {
        self.total_orders = index.len();
        for order in index.iter() {
            if order.payment_status == PaymentStatus::Completed {
                self.total_revenue += order.final_amount;
            }
            if order.status.is_active() {
                self.active_orders += 1;
            }
            if order.status == OrderStatus::Delivered {
                self.completed_orders += 1;
            }
        }
        self
    }
}

pub struct AdminView {
    session: Session,
    backend: Backend,
    orders: LiveOrders,
}

impl AdminView {
    pub async fn open(session: Session, backend: Backend) -> Result<Self, ViewError> {
        require_role(&session, Role::Admin)?;
        let orders = LiveOrders::open(backend.orders.clone(), filter(|_: &Order| true)).await?;
        Ok(Self {
            session,
            backend,
            orders,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn sync(&mut self) -> Result<usize, ViewError> {
        Ok(self.orders.sync().await?)
    }

    pub fn live(&mut self) -> &mut LiveOrders {
        &mut self.orders
    }

    /// Order figures come from the live index; people and restaurant counts are queried.
    pub async fn stats(&self) -> Result<AdminStats, ViewError> {
        let stats = AdminStats {
            total_customers: self.backend.profiles.count_by_role(Role::Customer).await?,
            total_restaurants: self.backend.restaurants.count().await?,
            ..AdminStats::default()
        };
        Ok(stats.with_orders(self.orders.index()))
    }

    pub fn recent_orders(&self) -> Vec<Order> {
        let mut orders = self.orders.orders();
        orders.truncate(self.backend.config.recent_orders_limit);
        orders
    }
}
