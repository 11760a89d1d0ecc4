//! Restaurant dashboard: the owner's restaurant, its menu and its incoming orders.

use crate::auth::Session;
use crate::dish_actor::DishError;
use crate::error::ValidationError;
use crate::framework::{filter, DomainClient};
use crate::lifecycle::Backend;
use crate::model::{
    Dish, DishForm, DishId, Order, OrderId, OrderItem, Restaurant, RestaurantCreate,
    RestaurantUpdate, Role,
};
use crate::order_actor::OrderError;
use crate::views::{require_role, LiveOrders, ViewError};

pub struct RestaurantView {
    session: Session,
    backend: Backend,
    restaurant: Option<Restaurant>,
    orders: Option<LiveOrders>,
}

impl RestaurantView {
    /// Opens the dashboard. An owner who has not registered a restaurant yet gets a view with
    /// no restaurant and no orders.
    pub async fn open(session: Session, backend: Backend) -> Result<Self, ViewError> {
        require_role(&session, Role::Restaurant)?;
        let restaurant = backend.restaurants.find_by_owner(session.user_id).await?;
        let mut view = Self {
            session,
            backend,
            restaurant: None,
            orders: None,
        };
        if let Some(restaurant) = restaurant {
            view.attach(restaurant).await?;
        }
        Ok(view)
    }

    async fn attach(&mut self, restaurant: Restaurant) -> Result<(), ViewError> {
        let restaurant_id = restaurant.id;
        let orders = LiveOrders::open(
            self.backend.orders.clone(),
            filter(move |o: &Order| o.restaurant_id == restaurant_id),
        )
        .await?;
        self.restaurant = Some(restaurant);
        self.orders = Some(orders);
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn restaurant(&self) -> Option<&Restaurant> {
        self.restaurant.as_ref()
    }

    fn require_restaurant(&self) -> Result<&Restaurant, ViewError> {
        self.restaurant
            .as_ref()
            .ok_or_else(|| ValidationError::NoRestaurant.into())
    }

    /// Registers the signed-in owner's restaurant. The owner id always comes from the session.
    pub async fn register(&mut self, mut params: RestaurantCreate) -> Result<&Restaurant, ViewError> {
        params.owner_id = self.session.user_id;
        let restaurant = self.backend.restaurants.register(params).await?;
        self.attach(restaurant).await?;
        self.require_restaurant()
    }

    pub async fn update_restaurant(&mut self, update: RestaurantUpdate) -> Result<&Restaurant, ViewError> {
        let id = self.require_restaurant()?.id;
        let updated = self.backend.restaurants.update_restaurant(id, update).await?;
        self.restaurant = Some(updated);
        self.require_restaurant()
    }

    // --- Menu ---

    /// Every dish, available or not, by category then name.
    pub async fn dishes(&self) -> Result<Vec<Dish>, ViewError> {
        let id = self.require_restaurant()?.id;
        Ok(self.backend.dishes.for_restaurant(id).await?)
    }

    pub async fn add_dish(&self, form: DishForm) -> Result<Dish, ViewError> {
        let id = self.require_restaurant()?.id;
        Ok(self.backend.dishes.add_dish(id, form).await?)
    }

    /// A dish of this restaurant. Dishes of other restaurants are reported as not on the menu.
    async fn own_dish(&self, id: DishId) -> Result<Dish, ViewError> {
        let restaurant_id = self.require_restaurant()?.id;
        let dish = self
            .backend
            .dishes
            .get(id)
            .await?
            .ok_or_else(|| DishError::NotFound(id.to_string()))?;
        if dish.restaurant_id != restaurant_id {
            return Err(DishError::NotOnMenu(id.to_string()).into());
        }
        Ok(dish)
    }

    pub async fn edit_dish(&self, id: DishId, form: DishForm) -> Result<Dish, ViewError> {
        self.own_dish(id).await?;
        Ok(self.backend.dishes.edit_dish(id, form).await?)
    }

    pub async fn set_availability(&self, id: DishId, available: bool) -> Result<Dish, ViewError> {
        self.own_dish(id).await?;
        Ok(self.backend.dishes.set_availability(id, available).await?)
    }

    pub async fn delete_dish(&self, id: DishId) -> Result<Dish, ViewError> {
        self.own_dish(id).await?;
        Ok(self.backend.dishes.delete(id).await?)
    }

    // --- Orders ---

    pub async fn sync(&mut self) -> Result<usize, ViewError> {
        match self.orders.as_mut() {
            Some(orders) => Ok(orders.sync().await?),
            None => Ok(0),
        }
    }

    pub fn live(&mut self) -> Option<&mut LiveOrders> {
        self.orders.as_mut()
    }

    /// Incoming orders, newest first.
    pub fn orders(&self) -> Vec<Order> {
        self.orders
            .as_ref()
            .map(LiveOrders::orders)
            .unwrap_or_default()
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.as_ref().and_then(|o| o.get(id))
    }

    /// Lines of an order placed at my restaurant.
    pub async fn order_items(&self, id: OrderId) -> Result<Vec<OrderItem>, ViewError> {
        let mine = self.require_restaurant()?.id;
        match self.backend.orders.get(id).await? {
            Some(order) if order.restaurant_id == mine => {}
            _ => return Err(OrderError::NotFound(id.to_string()).into()),
        }
        Ok(self.backend.order_items.for_order(id).await?)
    }

    pub async fn accept(&self, id: OrderId) -> Result<Order, ViewError> {
        Ok(self.backend.orders.accept(id, self.session.principal()).await?)
    }

    pub async fn reject(&self, id: OrderId) -> Result<Order, ViewError> {
        Ok(self.backend.orders.reject(id, self.session.principal()).await?)
    }

    pub async fn start_preparing(&self, id: OrderId) -> Result<Order, ViewError> {
        Ok(self
            .backend
            .orders
            .start_preparing(id, self.session.principal())
            .await?)
    }

    pub async fn mark_ready(&self, id: OrderId) -> Result<Order, ViewError> {
        Ok(self.backend.orders.mark_ready(id, self.session.principal()).await?)
    }
}
