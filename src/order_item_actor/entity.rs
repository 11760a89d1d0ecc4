use crate::error::ValidationError;
use crate::framework::Record;
use crate::model::{OrderItem, OrderItemCreate, OrderItemId};
use crate::order_item_actor::OrderItemError;
use async_trait::async_trait;

/// Order items have no update payload: once written they never change.
#[derive(Debug)]
pub enum OrderItemUpdate {}

#[derive(Debug)]
pub enum OrderItemAction {}

#[async_trait]
impl Record for OrderItem {
    const TABLE: &'static str = "order_items";
    type Id = OrderItemId;
    type Create = OrderItemCreate;
    type Update = OrderItemUpdate;
    type Action = OrderItemAction;
    type ActionResult = ();
    type Context = ();
    type Error = OrderItemError;

    fn id(&self) -> &OrderItemId {
        &self.id
    }

    fn from_create_params(id: OrderItemId, params: OrderItemCreate) -> Result<Self, OrderItemError> {
        let line = params.line;
        if line.quantity == 0 {
            return Err(ValidationError::InvalidQuantity.into());
        }
        if !line.price.is_finite() || line.price < 0.0 {
            return Err(ValidationError::InvalidPrice.into());
        }
        Ok(Self {
            id,
            order_id: params.order_id,
            dish_id: line.dish_id,
            quantity: line.quantity,
            price: line.price,
            notes: line.notes,
        })
    }

    async fn on_update(&mut self, update: OrderItemUpdate, _ctx: &()) -> Result<(), OrderItemError> {
        match update {}
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), OrderItemError> {
        Err(OrderItemError::Immutable)
    }

    async fn handle_action(&mut self, action: OrderItemAction, _ctx: &()) -> Result<(), OrderItemError> {
        match action {}
    }
}
