//! Customer dashboard: browse, cart, checkout and order tracking.

use crate::auth::Session;
use crate::error::ValidationError;
use crate::framework::{filter, DomainClient};
use crate::lifecycle::Backend;
use crate::model::{
    Coupon, Dish, Order, OrderCreate, OrderId, OrderItem, PaymentMethod, Restaurant, RestaurantId,
    Role,
};
use crate::order_actor::OrderError;
use crate::pricing::{self, Quote};
use crate::restaurant_actor::RestaurantError;
use crate::views::{require_role, Cart, LiveOrders, ViewError};
use chrono::Utc;
use std::collections::BTreeSet;
use tracing::{info, instrument};

/// A restaurant's menu as the customer sees it.
#[derive(Debug, Clone)]
pub struct Menu {
    pub restaurant: Restaurant,
    /// Available dishes, by category then name.
    pub dishes: Vec<Dish>,
    /// Distinct categories in menu order.
    pub categories: Vec<String>,
}

pub struct CustomerView {
    session: Session,
    backend: Backend,
    orders: LiveOrders,
    cart: Cart,
    coupon: Option<Coupon>,
}

impl CustomerView {
    pub async fn open(session: Session, backend: Backend) -> Result<Self, ViewError> {
        require_role(&session, Role::Customer)?;
        let me = session.user_id;
        let orders = LiveOrders::open(
            backend.orders.clone(),
            filter(move |o: &Order| o.customer_id == me),
        )
        .await?;
        Ok(Self {
            session,
            backend,
            orders,
            cart: Cart::new(),
            coupon: None,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Active restaurants, best rated first.
    pub async fn browse(
        &self,
        search: Option<&str>,
        cuisine: Option<&str>,
    ) -> Result<Vec<Restaurant>, ViewError> {
        Ok(self
            .backend
            .restaurants
            .browse(search.map(str::to_string), cuisine.map(str::to_string))
            .await?)
    }

    /// Cuisines offered by active restaurants, sorted.
    pub async fn cuisine_types(&self) -> Result<Vec<String>, ViewError> {
        let cuisines: BTreeSet<String> = self
            .backend
            .restaurants
            .browse(None, None)
            .await?
            .into_iter()
            .filter_map(|r| r.cuisine_type)
            .collect();
        Ok(cuisines.into_iter().collect())
    }

    pub async fn menu(&self, restaurant_id: RestaurantId) -> Result<Menu, ViewError> {
        let restaurant = self
            .backend
            .restaurants
            .get(restaurant_id)
            .await?
            .filter(|r| r.is_active)
            .ok_or_else(|| RestaurantError::NotFound(restaurant_id.to_string()))?;
        let dishes = self.backend.dishes.menu(restaurant_id).await?;
        let mut categories: Vec<String> = Vec::new();
        for dish in &dishes {
            if !categories.contains(&dish.category) {
                categories.push(dish.category.clone());
            }
        }
        Ok(Menu {
            restaurant,
            dishes,
            categories,
        })
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Looks up `code` and checks it against the current cart. The coupon stays applied
    /// until checkout or [`remove_coupon`](Self::remove_coupon).
    #[instrument(skip(self), fields(customer = %self.session.user_id))]
    pub async fn apply_coupon(&mut self, code: &str) -> Result<Quote, ViewError> {
        let coupon = self
            .backend
            .coupons
            .find_active(code)
            .await?
            .ok_or(ValidationError::InvalidCoupon)?;
        let quote = pricing::quote(&self.cart.order_lines(), Some(&coupon), Utc::now())?;
        info!(code = %coupon.code, discount = quote.discount, "Coupon applied");
        self.coupon = Some(coupon);
        Ok(quote)
    }

    pub fn remove_coupon(&mut self) {
        self.coupon = None;
    }

    pub fn applied_coupon(&self) -> Option<&Coupon> {
        self.coupon.as_ref()
    }

    /// Totals for the current cart and applied coupon.
    pub fn quote(&self) -> Result<Quote, ValidationError> {
        pricing::quote(&self.cart.order_lines(), self.coupon.as_ref(), Utc::now())
    }

    /// Places the cart as one order. The cart and coupon are cleared on success.
    #[instrument(skip(self, delivery_address), fields(customer = %self.session.user_id))]
    pub async fn place_order(
        &mut self,
        delivery_address: &str,
        payment_method: PaymentMethod,
    ) -> Result<Order, ViewError> {
        let restaurant_id = self.cart.restaurant_id().ok_or(ValidationError::EmptyCart)?;
        if delivery_address.trim().is_empty() {
            return Err(ValidationError::MissingAddress.into());
        }
        let quote = self.quote()?;
        let order = self
            .backend
            .orders
            .place_order(OrderCreate {
                customer_id: self.session.user_id,
                restaurant_id,
                lines: self.cart.order_lines(),
                quote,
                delivery_address: delivery_address.to_string(),
                payment_method,
            })
            .await?;
        self.cart.clear();
        self.coupon = None;
        info!(order_id = %order.id, "Checkout complete");
        Ok(order)
    }

    /// Applies pending order changes.
    pub async fn sync(&mut self) -> Result<usize, ViewError> {
        Ok(self.orders.sync().await?)
    }

    pub fn live(&mut self) -> &mut LiveOrders {
        &mut self.orders
    }

    /// My orders, newest first.
    pub fn orders(&self) -> Vec<Order> {
        self.orders.orders()
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    /// Lines of one of my orders. Reads the store, so an order is readable before the view syncs.
    pub async fn order_items(&self, id: OrderId) -> Result<Vec<OrderItem>, ViewError> {
        let me = self.session.user_id;
        match self.backend.orders.get(id).await? {
            Some(order) if order.customer_id == me => {}
            _ => return Err(OrderError::NotFound(id.to_string()).into()),
        }
        Ok(self.backend.order_items.for_order(id).await?)
    }

    /// Completes a delivery with the code the agent shows at the door.
    #[instrument(skip(self, otp))]
    pub async fn confirm_delivery(&self, id: OrderId, otp: &str) -> Result<Order, ViewError> {
        Ok(self
            .backend
            .orders
            .confirm_delivery(id, self.session.principal(), otp)
            .await?)
    }
}
