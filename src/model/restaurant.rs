use crate::model::{ProfileId, RestaurantId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A restaurant. Each owner has at most one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub owner_id: ProfileId,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub phone: String,
    pub image_url: Option<String>,
    pub cuisine_type: Option<String>,
    pub rating: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub owner_id: ProfileId,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub phone: String,
    pub image_url: Option<String>,
    pub cuisine_type: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub cuisine_type: Option<String>,
    pub rating: Option<f64>,
    pub is_active: Option<bool>,
}
