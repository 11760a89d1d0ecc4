//! # Coupon Client
use crate::coupon_actor::CouponError;
use crate::framework::{DomainClient, Query, StoreError, TableClient};
use crate::model::{Coupon, CouponCreate, CouponId, CouponUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CouponClient {
    inner: TableClient<Coupon>,
}

impl CouponClient {
    pub fn new(inner: TableClient<Coupon>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DomainClient<Coupon> for CouponClient {
    type Error = CouponError;

    fn inner(&self) -> &TableClient<Coupon> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        CouponError::from(e)
    }
}

impl CouponClient {
    #[instrument(skip(self), fields(code = %params.code))]
    pub async fn create_coupon(&self, params: CouponCreate) -> Result<Coupon, CouponError> {
        debug!("Sending request");
        self.inner.insert(params).await.map_err(CouponError::from)
    }

    #[instrument(skip(self))]
    pub async fn set_active(&self, id: CouponId, active: bool) -> Result<Coupon, CouponError> {
        self.inner
            .update(id, CouponUpdate::SetActive(active))
            .await
            .map_err(CouponError::from)
    }

    /// Looks up an active coupon by code, ignoring case.
    #[instrument(skip(self))]
    pub async fn find_active(&self, code: &str) -> Result<Option<Coupon>, CouponError> {
        let code = Coupon::normalize_code(code);
        let rows = self
            .inner
            .select(
                Query::all()
                    .filter(move |c: &Coupon| c.code == code && c.is_active)
                    .limit(1),
            )
            .await?;
        Ok(rows.into_iter().next())
    }
}
