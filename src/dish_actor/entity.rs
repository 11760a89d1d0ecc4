use crate::dish_actor::DishError;
use crate::error::ValidationError;
use crate::framework::Record;
use crate::model::{Dish, DishCreate, DishForm, DishId, DishUpdate};
use async_trait::async_trait;
use chrono::Utc;

#[derive(Debug)]
pub enum DishAction {}

/// Fields of a submitted menu form after validation.
struct ValidForm {
    name: String,
    description: Option<String>,
    price: f64,
    category: String,
    image_url: Option<String>,
    is_available: bool,
}

fn validate(form: DishForm) -> Result<ValidForm, ValidationError> {
    let name = form.name.trim().to_string();
    let category = form.category.trim().to_string();
    let price = form.price.ok_or(ValidationError::MissingFields)?;
    if name.is_empty() || category.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidPrice);
    }
    Ok(ValidForm {
        name,
        description: form.description.filter(|d| !d.trim().is_empty()),
        price,
        category,
        image_url: form.image_url.filter(|u| !u.trim().is_empty()),
        is_available: form.is_available,
    })
}

#[async_trait]
impl Record for Dish {
    const TABLE: &'static str = "dishes";
    type Id = DishId;
    type Create = DishCreate;
    type Update = DishUpdate;
    type Action = DishAction;
    type ActionResult = ();
    type Context = ();
    type Error = DishError;

    fn id(&self) -> &DishId {
        &self.id
    }

    fn from_create_params(id: DishId, params: DishCreate) -> Result<Self, DishError> {
        let form = validate(params.form)?;
        Ok(Self {
            id,
            restaurant_id: params.restaurant_id,
            name: form.name,
            description: form.description,
            price: form.price,
            category: form.category,
            image_url: form.image_url,
            is_available: form.is_available,
            created_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, update: DishUpdate, _ctx: &()) -> Result<(), DishError> {
        match update {
            DishUpdate::Edit(form) => {
                let form = validate(form)?;
                self.name = form.name;
                self.description = form.description;
                self.price = form.price;
                self.category = form.category;
                self.image_url = form.image_url;
                self.is_available = form.is_available;
            }
            DishUpdate::SetAvailability(available) => self.is_available = available,
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: DishAction, _ctx: &()) -> Result<(), DishError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RestaurantId;

    fn form(name: &str, price: Option<f64>, category: &str) -> DishForm {
        DishForm {
            name: name.into(),
            price,
            category: category.into(),
            is_available: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_required_fields() {
        for bad in [
            form("", Some(5.0), "Mains"),
            form("Dal", None, "Mains"),
            form("Dal", Some(5.0), "  "),
        ] {
            let err = Dish::from_create_params(
                DishId::new(),
                DishCreate {
                    restaurant_id: RestaurantId::new(),
                    form: bad,
                },
            )
            .unwrap_err();
            assert_eq!(err.to_string(), "Please fill all required fields");
        }
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let err = validate(form("Dal", Some(-1.0), "Mains")).err();
        assert_eq!(err, Some(ValidationError::InvalidPrice));
    }

    #[tokio::test]
    async fn test_edit_replaces_fields() {
        let mut dish = Dish::from_create_params(
            DishId::new(),
            DishCreate {
                restaurant_id: RestaurantId::new(),
                form: form("Dal", Some(120.0), "Mains"),
            },
        )
        .unwrap();
        dish.on_update(DishUpdate::Edit(form("Dal Makhani", Some(180.0), "Curries")), &())
            .await
            .unwrap();
        assert_eq!(dish.name, "Dal Makhani");
        assert_eq!(dish.price, 180.0);

        dish.on_update(DishUpdate::SetAvailability(false), &()).await.unwrap();
        assert!(!dish.is_available);
    }
}
