//! # Profile Client
//!
//! Wraps a `TableClient<Profile>` with the profile operations used by sign-up and the admin view.
use crate::framework::{DomainClient, Query, StoreError, TableClient};
use crate::model::{Profile, ProfileCreate, ProfileId, ProfileUpdate, Role};
use crate::profile_actor::ProfileError;
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct ProfileClient {
    inner: TableClient<Profile>,
}

impl ProfileClient {
    pub fn new(inner: TableClient<Profile>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DomainClient<Profile> for ProfileClient {
    type Error = ProfileError;

    fn inner(&self) -> &TableClient<Profile> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        ProfileError::from(e)
    }
}

impl ProfileClient {
    #[instrument(skip(self), fields(email = %params.email, role = %params.role))]
    pub async fn create_profile(&self, params: ProfileCreate) -> Result<Profile, ProfileError> {
        debug!("Sending request");
        self.inner.insert(params).await.map_err(ProfileError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_profile(
        &self,
        id: ProfileId,
        update: ProfileUpdate,
    ) -> Result<Profile, ProfileError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(ProfileError::from)
    }

    /// Number of profiles holding `role`.
    #[instrument(skip(self))]
    pub async fn count_by_role(&self, role: Role) -> Result<usize, ProfileError> {
        let rows = self
            .inner
            .select(Query::all().filter(move |p: &Profile| p.role == role))
            .await?;
        Ok(rows.len())
    }
}
