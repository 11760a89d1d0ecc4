use crate::model::{OrderId, OrderStatus, ProfileId, TrackingId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only delivery event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryTracking {
    pub id: TrackingId,
    pub order_id: OrderId,
    pub delivery_agent_id: ProfileId,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TrackingCreate {
    pub order_id: OrderId,
    pub delivery_agent_id: ProfileId,
    pub status: OrderStatus,
}
