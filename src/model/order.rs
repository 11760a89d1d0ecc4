use crate::model::{DishId, OrderId, ProfileId, RestaurantId};
use crate::pricing::Quote;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Preparing,
    Ready,
    PickedUp,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Statuses an admin counts as in flight.
    pub const ACTIVE: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::PickedUp,
    ];

    /// The transition table. Anything not listed here is rejected.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Accepted)
                | (Pending, Cancelled)
                | (Accepted, Preparing)
                | (Preparing, Ready)
                | (Ready, PickedUp)
                | (PickedUp, Delivered)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    pub fn is_active(self) -> bool {
        Self::ACTIVE.contains(&self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::PickedUp => "picked_up",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: ProfileId,
    pub restaurant_id: RestaurantId,
    pub delivery_agent_id: Option<ProfileId>,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub discount_amount: f64,
    pub final_amount: f64,
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub delivery_otp: Option<String>,
    pub otp_verified_at: Option<DateTime<Utc>>,
    pub estimated_delivery_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Lines waiting to be written by `on_create`. Empty on every stored row.
    #[serde(skip)]
    pub(crate) staged_lines: Vec<OrderLine>,
}

impl Order {
    pub fn is_unassigned(&self) -> bool {
        self.delivery_agent_id.is_none()
    }

    pub fn is_assigned_to(&self, agent: ProfileId) -> bool {
        self.delivery_agent_id == Some(agent)
    }
}

/// One cart line as it is written to `order_items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub dish_id: DishId,
    pub quantity: u32,
    /// Dish price at checkout.
    pub price: f64,
    pub notes: Option<String>,
}

/// Order placement payload: header fields plus the lines written alongside it.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: ProfileId,
    pub restaurant_id: RestaurantId,
    pub lines: Vec<OrderLine>,
    pub quote: Quote,
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
}
