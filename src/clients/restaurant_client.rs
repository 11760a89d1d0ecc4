//! # Restaurant Client
use crate::framework::{DomainClient, Query, StoreError, TableClient};
use crate::model::{ProfileId, Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate};
use crate::restaurant_actor::RestaurantError;
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct RestaurantClient {
    inner: TableClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: TableClient<Restaurant>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DomainClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &TableClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        RestaurantError::from(e)
    }
}

impl RestaurantClient {
    #[instrument(skip(self), fields(name = %params.name))]
    pub async fn register(&self, params: RestaurantCreate) -> Result<Restaurant, RestaurantError> {
        debug!("Sending request");
        self.inner.insert(params).await.map_err(RestaurantError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_restaurant(
        &self,
        id: RestaurantId,
        update: RestaurantUpdate,
    ) -> Result<Restaurant, RestaurantError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(RestaurantError::from)
    }

    /// The restaurant owned by `owner`, if any.
    #[instrument(skip(self))]
    pub async fn find_by_owner(&self, owner: ProfileId) -> Result<Option<Restaurant>, RestaurantError> {
        let rows = self
            .inner
            .select(Query::all().filter(move |r: &Restaurant| r.owner_id == owner).limit(1))
            .await?;
        Ok(rows.into_iter().next())
    }

    /// Active restaurants, best rated first, optionally narrowed by a case-insensitive search on
    /// name or cuisine and by an exact cuisine.
    #[instrument(skip(self))]
    pub async fn browse(
        &self,
        search: Option<String>,
        cuisine: Option<String>,
    ) -> Result<Vec<Restaurant>, RestaurantError> {
        let search = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        let mut query = Query::all()
            .filter(|r: &Restaurant| r.is_active)
            .order_by_desc(|a: &Restaurant, b: &Restaurant| a.rating.total_cmp(&b.rating));
        if let Some(term) = search {
            query = query.filter(move |r: &Restaurant| {
                r.name.to_lowercase().contains(&term)
                    || r.cuisine_type
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&term))
            });
        }
        if let Some(cuisine) = cuisine.filter(|c| !c.is_empty() && c != "all") {
            query = query.filter(move |r: &Restaurant| r.cuisine_type.as_deref() == Some(cuisine.as_str()));
        }
        self.inner.select(query).await.map_err(RestaurantError::from)
    }

    /// Number of restaurants on the platform.
    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<usize, RestaurantError> {
        Ok(self.inner.select(Query::all()).await?.len())
    }
}
