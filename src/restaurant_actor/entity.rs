use crate::clients::ProfileClient;
use crate::error::ValidationError;
use crate::framework::{DomainClient, Record};
use crate::model::{Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate, Role};
use crate::restaurant_actor::RestaurantError;
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

#[derive(Debug)]
pub enum RestaurantAction {}

fn required(value: &str) -> Result<String, RestaurantError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingFields.into());
    }
    Ok(value.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[async_trait]
impl Record for Restaurant {
    const TABLE: &'static str = "restaurants";
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = RestaurantUpdate;
    type Action = RestaurantAction;
    type ActionResult = ();
    type Context = ProfileClient;
    type Error = RestaurantError;

    fn id(&self) -> &RestaurantId {
        &self.id
    }

    /// One restaurant per owner.
    fn unique_key(&self) -> Option<String> {
        Some(self.owner_id.to_string())
    }

    fn from_create_params(
        id: RestaurantId,
        params: RestaurantCreate,
    ) -> Result<Self, RestaurantError> {
        Ok(Self {
            id,
            owner_id: params.owner_id,
            name: required(&params.name)?,
            description: optional(params.description),
            address: required(&params.address)?,
            phone: required(&params.phone)?,
            image_url: optional(params.image_url),
            cuisine_type: optional(params.cuisine_type),
            rating: 0.0,
            is_active: true,
            created_at: Utc::now(),
        })
    }

    /// The owner must be a signed-up restaurant account.
    async fn on_create(&mut self, profiles: &ProfileClient) -> Result<(), RestaurantError> {
        let owner = profiles
            .get(self.owner_id)
            .await?
            .ok_or_else(|| RestaurantError::InvalidOwner(self.owner_id.to_string()))?;
        if owner.role != Role::Restaurant {
            return Err(RestaurantError::InvalidOwner(format!(
                "{} has role {}",
                owner.id, owner.role
            )));
        }
        info!(restaurant = %self.name, owner = %owner.id, "Restaurant registered");
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: RestaurantUpdate,
        _ctx: &ProfileClient,
    ) -> Result<(), RestaurantError> {
        if let Some(name) = update.name {
            self.name = required(&name)?;
        }
        if let Some(address) = update.address {
            self.address = required(&address)?;
        }
        if let Some(phone) = update.phone {
            self.phone = required(&phone)?;
        }
        if update.description.is_some() {
            self.description = optional(update.description);
        }
        if update.image_url.is_some() {
            self.image_url = optional(update.image_url);
        }
        if update.cuisine_type.is_some() {
            self.cuisine_type = optional(update.cuisine_type);
        }
        if let Some(rating) = update.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(RestaurantError::InvalidRating);
            }
            self.rating = rating;
        }
        if let Some(active) = update.is_active {
            self.is_active = active;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: RestaurantAction,
        _ctx: &ProfileClient,
    ) -> Result<(), RestaurantError> {
        match action {}
    }
}
