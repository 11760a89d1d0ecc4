use crate::model::{DishId, RestaurantId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

/// The menu form. Used both to add a dish and to overwrite an existing one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishForm {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: String,
    pub image_url: Option<String>,
    pub is_available: bool,
}

#[derive(Debug, Clone)]
pub struct DishCreate {
    pub restaurant_id: RestaurantId,
    pub form: DishForm,
}

#[derive(Debug, Clone)]
pub enum DishUpdate {
    /// Replace every editable field.
    Edit(DishForm),
    SetAvailability(bool),
}
