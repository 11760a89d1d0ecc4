//! The customer's cart. Lives in the view only; nothing is stored until checkout.

use crate::model::{Dish, DishId, OrderLine, RestaurantId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub dish: Dish,
    pub quantity: u32,
    pub notes: Option<String>,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.dish.price * f64::from(self.quantity)
    }
}

/// Dishes from a single restaurant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    restaurant_id: Option<RestaurantId>,
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one of `dish`. A dish from another restaurant starts a new cart.
    pub fn add(&mut self, dish: &Dish) {
        if self.restaurant_id != Some(dish.restaurant_id) {
            self.clear();
            self.restaurant_id = Some(dish.restaurant_id);
        }
        match self.lines.iter_mut().find(|l| l.dish.id == dish.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                dish: dish.clone(),
                quantity: 1,
                notes: None,
            }),
        }
    }

    /// Takes one of the dish out; the line goes away at zero.
    pub fn remove(&mut self, dish_id: DishId) {
        if let Some(pos) = self.lines.iter().position(|l| l.dish.id == dish_id) {
            if self.lines[pos].quantity > 1 {
                self.lines[pos].quantity -= 1;
            } else {
                self.lines.remove(pos);
            }
        }
        if self.lines.is_empty() {
            self.restaurant_id = None;
        }
    }

    pub fn set_notes(&mut self, dish_id: DishId, notes: Option<String>) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.dish.id == dish_id) {
            line.notes = notes.filter(|n| !n.trim().is_empty());
        }
    }

    pub fn quantity(&self, dish_id: DishId) -> u32 {
        self.lines
            .iter()
            .find(|l| l.dish.id == dish_id)
            .map_or(0, |l| l.quantity)
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn restaurant_id(&self) -> Option<RestaurantId> {
        self.restaurant_id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.restaurant_id = None;
    }

    /// Lines as they are written at checkout, priced at the dish's current price.
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.lines
            .iter()
            .map(|l| OrderLine {
                dish_id: l.dish.id,
                quantity: l.quantity,
                price: l.dish.price,
                notes: l.notes.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn dish(restaurant_id: RestaurantId, price: f64) -> Dish {
        Dish {
            id: DishId::new(),
            restaurant_id,
            name: "Masala Dosa".into(),
            description: None,
            price,
            category: "South Indian".into(),
            image_url: None,
            is_available: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_and_remove() {
        let restaurant = RestaurantId::new();
        let dosa = dish(restaurant, 100.0);
        let vada = dish(restaurant, 50.0);
        let mut cart = Cart::new();

        cart.add(&dosa);
        cart.add(&dosa);
        cart.add(&vada);
        assert_eq!(cart.quantity(dosa.id), 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal(), 250.0);

        cart.remove(dosa.id);
        assert_eq!(cart.quantity(dosa.id), 1);
        cart.remove(dosa.id);
        assert_eq!(cart.quantity(dosa.id), 0);
        assert_eq!(cart.lines().len(), 1);

        cart.remove(vada.id);
        assert!(cart.is_empty());
        assert_eq!(cart.restaurant_id(), None);
    }

    #[test]
    fn test_other_restaurant_starts_new_cart() {
        let first = dish(RestaurantId::new(), 100.0);
        let second = dish(RestaurantId::new(), 80.0);
        let mut cart = Cart::new();

        cart.add(&first);
        cart.add(&second);
        assert_eq!(cart.quantity(first.id), 0);
        assert_eq!(cart.restaurant_id(), Some(second.restaurant_id));
        assert_eq!(cart.subtotal(), 80.0);
    }

    #[test]
    fn test_order_lines_copy_price_and_notes() {
        let dosa = dish(RestaurantId::new(), 120.0);
        let mut cart = Cart::new();
        cart.add(&dosa);
        cart.set_notes(dosa.id, Some("extra chutney".into()));

        let lines = cart.order_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].price, 120.0);
        assert_eq!(lines[0].notes.as_deref(), Some("extra chutney"));
    }
}
