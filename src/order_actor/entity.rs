use crate::clients::{OrderItemClient, RestaurantClient, TrackingClient};
use crate::error::ValidationError;
use crate::framework::{DomainClient, Record};
use crate::model::{
    Order, OrderCreate, OrderId, OrderStatus, PaymentStatus, Principal, Role, TrackingCreate,
};
use crate::order_actor::otp::{generate_otp, otp_matches};
use crate::order_actor::{OrderAction, OrderError, OrderUpdate};
use crate::pricing;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

/// Tables an order talks to from its hooks.
#[derive(Clone)]
pub struct OrderContext {
    pub restaurants: RestaurantClient,
    pub items: OrderItemClient,
    pub tracking: TrackingClient,
}

impl Order {
    fn ensure_transition(&self, to: OrderStatus) -> Result<(), OrderError> {
        if self.status.can_transition_to(to) {
            Ok(())
        } else {
            Err(OrderError::InvalidTransition {
                from: self.status,
                to,
            })
        }
    }

    fn advance(&mut self, to: OrderStatus) {
        self.status = to;
        self.updated_at = Utc::now();
    }

    async fn ensure_restaurant_owner(
        &self,
        by: Principal,
        restaurants: &RestaurantClient,
    ) -> Result<(), OrderError> {
        if by.role != Role::Restaurant {
            return Err(OrderError::Forbidden(format!("{} cannot manage orders", by.role)));
        }
        let restaurant = restaurants
            .get(self.restaurant_id)
            .await?
            .ok_or_else(|| OrderError::RestaurantUnavailable(self.restaurant_id.to_string()))?;
        if restaurant.owner_id != by.id {
            return Err(OrderError::Forbidden(format!(
                "order {} belongs to another restaurant",
                self.id
            )));
        }
        Ok(())
    }

    async fn claim(&mut self, by: Principal, tracking: &TrackingClient) -> Result<(), OrderError> {
        if by.role != Role::DeliveryAgent {
            return Err(OrderError::Forbidden(format!("{} cannot claim orders", by.role)));
        }
        self.ensure_transition(OrderStatus::PickedUp)?;
        if !self.is_unassigned() {
            return Err(OrderError::AlreadyClaimed);
        }

        self.delivery_agent_id = Some(by.id);
        self.delivery_otp = Some(generate_otp());
        self.advance(OrderStatus::PickedUp);

        // the claim stands even if the tracking row is lost
        let event = TrackingCreate {
            order_id: self.id,
            delivery_agent_id: by.id,
            status: OrderStatus::PickedUp,
        };
        if let Err(e) = tracking.record(event).await {
            warn!(order_id = %self.id, error = %e, "Tracking event not recorded");
        }
        info!(order_id = %self.id, agent = %by.id, "Order claimed");
        Ok(())
    }

    fn confirm_delivery(&mut self, by: Principal, otp: &str) -> Result<(), OrderError> {
        if by.id != self.customer_id {
            return Err(OrderError::Forbidden(format!(
                "only the customer can confirm order {}",
                self.id
            )));
        }
        self.ensure_transition(OrderStatus::Delivered)?;
        if otp.trim().is_empty() {
            return Err(ValidationError::EmptyOtp.into());
        }
        if !otp_matches(self.delivery_otp.as_deref(), otp) {
            warn!(order_id = %self.id, "OTP mismatch");
            return Err(ValidationError::OtpMismatch.into());
        }
        self.otp_verified_at = Some(Utc::now());
        self.advance(OrderStatus::Delivered);
        info!(order_id = %self.id, "Delivery confirmed");
        Ok(())
    }
}

#[async_trait]
impl Record for Order {
    const TABLE: &'static str = "orders";
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = OrderContext;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Validates the checkout and builds a `pending` order. Totals come from the lines and
    /// the quoted discount, so `final_amount = total_amount - discount_amount` by construction.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.lines.is_empty() {
            return Err(ValidationError::EmptyCart.into());
        }
        if params.lines.iter().any(|line| line.quantity == 0) {
            return Err(ValidationError::InvalidQuantity.into());
        }
        let address = params.delivery_address.trim();
        if address.is_empty() {
            return Err(ValidationError::MissingAddress.into());
        }

        let total_amount = pricing::subtotal(&params.lines);
        let discount_amount = params.quote.discount;
        let now = Utc::now();
        Ok(Self {
            id,
            customer_id: params.customer_id,
            restaurant_id: params.restaurant_id,
            delivery_agent_id: None,
            status: OrderStatus::Pending,
            total_amount,
            discount_amount,
            final_amount: total_amount - discount_amount,
            delivery_address: address.to_string(),
            payment_method: params.payment_method,
            payment_status: PaymentStatus::Completed,
            delivery_otp: None,
            otp_verified_at: None,
            estimated_delivery_time: None,
            created_at: now,
            updated_at: now,
            staged_lines: params.lines,
        })
    }

    /// Writes the order lines before the header is committed. If the item write fails the
    /// header is never stored.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        let restaurant = ctx
            .restaurants
            .get(self.restaurant_id)
            .await?
            .ok_or_else(|| OrderError::RestaurantUnavailable(self.restaurant_id.to_string()))?;
        if !restaurant.is_active {
            return Err(OrderError::RestaurantUnavailable(restaurant.name));
        }

        let lines = std::mem::take(&mut self.staged_lines);
        let count = lines.len();
        ctx.items
            .add_lines(self.id, lines)
            .await
            .map_err(|e| OrderError::ItemsRejected(e.to_string()))?;
        info!(order_id = %self.id, items = count, final_amount = self.final_amount, "Order placed");
        Ok(())
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &OrderContext) -> Result<(), OrderError> {
        match update {}
    }

    async fn on_delete(&self, _ctx: &OrderContext) -> Result<(), OrderError> {
        Err(OrderError::Immutable)
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<Order, OrderError> {
        let target = action.target();
        match action {
            OrderAction::Accept { by }
            | OrderAction::Reject { by }
            | OrderAction::StartPreparing { by }
            | OrderAction::MarkReady { by } => {
                self.ensure_restaurant_owner(by, &ctx.restaurants).await?;
                self.ensure_transition(target)?;
                self.advance(target);
                info!(order_id = %self.id, status = %target, "Order status changed");
            }
            OrderAction::Claim { by } => self.claim(by, &ctx.tracking).await?,
            OrderAction::ConfirmDelivery { by, otp } => self.confirm_delivery(by, &otp)?,
        }
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderLine, PaymentMethod, ProfileId, RestaurantId};
    use crate::pricing::Quote;

    fn placed() -> Order {
        let lines = vec![OrderLine {
            dish_id: crate::model::DishId::new(),
            quantity: 2,
            price: 100.0,
            notes: None,
        }];
        Order::from_create_params(
            OrderId::new(),
            OrderCreate {
                customer_id: ProfileId::new(),
                restaurant_id: RestaurantId::new(),
                quote: Quote::new(200.0, 20.0, Some("SAVE".into())),
                lines,
                delivery_address: "  12 Park Street ".into(),
                payment_method: PaymentMethod::Cash,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_new_order_is_pending_and_paid() {
        let order = placed();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_status, PaymentStatus::Completed);
        assert_eq!(order.delivery_address, "12 Park Street");
        assert_eq!(order.total_amount, 200.0);
        assert_eq!(order.final_amount, order.total_amount - order.discount_amount);
        assert_eq!(order.staged_lines.len(), 1);
    }

    #[test]
    fn test_placement_validation() {
        let mut params = OrderCreate {
            customer_id: ProfileId::new(),
            restaurant_id: RestaurantId::new(),
            lines: vec![],
            quote: Quote::new(0.0, 0.0, None),
            delivery_address: "x".into(),
            payment_method: PaymentMethod::Card,
        };
        let err = Order::from_create_params(OrderId::new(), params.clone()).unwrap_err();
        assert!(matches!(err, OrderError::Validation(ValidationError::EmptyCart)));

        params.lines.push(OrderLine {
            dish_id: crate::model::DishId::new(),
            quantity: 1,
            price: 10.0,
            notes: None,
        });
        params.delivery_address = "   ".into();
        let err = Order::from_create_params(OrderId::new(), params).unwrap_err();
        assert_eq!(err.to_string(), "Please enter delivery address");
    }

    #[test]
    fn test_confirm_delivery_checks_customer_status_and_code() {
        let mut order = placed();
        let customer = Principal {
            id: order.customer_id,
            role: Role::Customer,
        };

        // not picked up yet
        let err = order.confirm_delivery(customer, "123456").unwrap_err();
        assert!(matches!(err, OrderError::InvalidTransition { .. }));

        order.status = OrderStatus::PickedUp;
        order.delivery_otp = Some("654321".into());

        let stranger = Principal {
            id: ProfileId::new(),
            role: Role::Customer,
        };
        assert!(matches!(
            order.confirm_delivery(stranger, "654321"),
            Err(OrderError::Forbidden(_))
        ));

        let err = order.confirm_delivery(customer, "").unwrap_err();
        assert_eq!(err.to_string(), "Please enter OTP");

        let err = order.confirm_delivery(customer, " 654321 ").unwrap_err();
        assert!(matches!(err, OrderError::Validation(ValidationError::OtpMismatch)));
        assert_eq!(order.status, OrderStatus::PickedUp);

        let err = order.confirm_delivery(customer, "111111").unwrap_err();
        assert_eq!(err.to_string(), "Invalid OTP. Please try again.");
        assert_eq!(order.status, OrderStatus::PickedUp);
        assert!(order.otp_verified_at.is_none());

        order.confirm_delivery(customer, "654321").unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);
        assert!(order.otp_verified_at.is_some());
    }
}
