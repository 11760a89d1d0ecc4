//! Delivery dashboard: ready orders to claim and the agent's own deliveries.

use crate::auth::Session;
use crate::error::ValidationError;
use crate::framework::filter;
use crate::lifecycle::Backend;
use crate::model::{DeliveryTracking, Order, OrderId, OrderStatus, Role};
use crate::views::{require_role, LiveOrders, ViewError};
use tracing::{instrument, warn};

pub struct DeliveryView {
    session: Session,
    backend: Backend,
    orders: LiveOrders,
}

impl DeliveryView {
    pub async fn open(session: Session, backend: Backend) -> Result<Self, ViewError> {
        require_role(&session, Role::DeliveryAgent)?;
        let me = session.user_id;
        let orders = LiveOrders::open(
            backend.orders.clone(),
            filter(move |o: &Order| {
                (o.status == OrderStatus::Ready && o.is_unassigned()) || o.is_assigned_to(me)
            }),
        )
        .await?;
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

    fn mine(&self, keep: impl Fn(&Order) -> bool) -> Vec<Order> {
        let me = self.session.user_id;
        self.orders
            .orders()
            .into_iter()
            .filter(|o| o.is_assigned_to(me) && keep(o))
            .collect()
    }

    /// Ready orders nobody has claimed yet.
    pub fn available(&self) -> Vec<Order> {
        self.orders
            .orders()
            .into_iter()
            .filter(|o| o.status == OrderStatus::Ready && o.is_unassigned())
            .collect()
    }

    /// My deliveries still on the road.
    pub fn active(&self) -> Vec<Order> {
        self.mine(|o| !o.status.is_terminal())
    }

    pub fn completed(&self) -> Vec<Order> {
        self.mine(|o| o.status == OrderStatus::Delivered)
    }

    /// Claims a ready order. Refused while another delivery of mine is still picked up.
    #[instrument(skip(self), fields(agent = %self.session.user_id))]
    pub async fn claim(&mut self, id: OrderId) -> Result<Order, ViewError> {
        let me = self.session.user_id;
        let in_progress = self
            .backend
            .orders
            .scoped(filter(move |o: &Order| {
                o.is_assigned_to(me) && o.status == OrderStatus::PickedUp
            }))
            .await?;
        if let Some(current) = in_progress.first() {
            warn!(current = %current.id, "Claim refused, delivery in progress");
            return Err(ValidationError::ActiveDeliveryInProgress.into());
        }
        Ok(self.backend.orders.claim(id, self.session.principal()).await?)
    }

    /// The delivery code of an order assigned to me. `None` for anyone else's order.
    pub fn otp_for(&self, id: OrderId) -> Option<String> {
        self.orders
            .get(id)
            .filter(|o| o.is_assigned_to(self.session.user_id))
            .and_then(|o| o.delivery_otp.clone())
    }

    pub async fn tracking(&self, id: OrderId) -> Result<Vec<DeliveryTracking>, ViewError> {
        Ok(self.backend.tracking.history(id).await?)
    }
}
