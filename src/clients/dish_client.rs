//! # Dish Client
use crate::dish_actor::DishError;
use crate::framework::{DomainClient, Query, StoreError, TableClient};
use crate::model::{Dish, DishCreate, DishForm, DishId, DishUpdate, RestaurantId};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct DishClient {
    inner: TableClient<Dish>,
}

impl DishClient {
    pub fn new(inner: TableClient<Dish>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DomainClient<Dish> for DishClient {
    type Error = DishError;

    fn inner(&self) -> &TableClient<Dish> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        DishError::from(e)
    }
}

impl DishClient {
    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn add_dish(&self, restaurant_id: RestaurantId, form: DishForm) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.inner
            .insert(DishCreate { restaurant_id, form })
            .await
            .map_err(DishError::from)
    }

    #[instrument(skip(self, form))]
    pub async fn edit_dish(&self, id: DishId, form: DishForm) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.inner
            .update(id, DishUpdate::Edit(form))
            .await
            .map_err(DishError::from)
    }

    #[instrument(skip(self))]
    pub async fn set_availability(&self, id: DishId, available: bool) -> Result<Dish, DishError> {
        self.inner
            .update(id, DishUpdate::SetAvailability(available))
            .await
            .map_err(DishError::from)
    }

    /// Every dish of a restaurant, grouped by category.
    #[instrument(skip(self))]
    pub async fn for_restaurant(&self, restaurant_id: RestaurantId) -> Result<Vec<Dish>, DishError> {
        self.inner
            .select(
                Query::all()
                    .filter(move |d: &Dish| d.restaurant_id == restaurant_id)
                    .order_by(|a: &Dish, b: &Dish| {
                        a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name))
                    }),
            )
            .await
            .map_err(DishError::from)
    }

    /// The customer-facing menu: available dishes only, grouped by category.
    #[instrument(skip(self))]
    pub async fn menu(&self, restaurant_id: RestaurantId) -> Result<Vec<Dish>, DishError> {
        Ok(self
            .for_restaurant(restaurant_id)
            .await?
            .into_iter()
            .filter(|d| d.is_available)
            .collect())
    }
}
