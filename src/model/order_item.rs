use crate::model::{DishId, OrderId, OrderItemId, OrderLine};
use serde::{Deserialize, Serialize};

/// A line of a placed order. Never changes once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub dish_id: DishId,
    pub quantity: u32,
    pub price: f64,
    pub notes: Option<String>,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone)]
pub struct OrderItemCreate {
    pub order_id: OrderId,
    pub line: OrderLine,
}
