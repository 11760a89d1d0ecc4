//! # DeliveryTracking Client
use crate::framework::{DomainClient, Query, StoreError, TableClient};
use crate::model::{DeliveryTracking, OrderId, TrackingCreate};
use crate::tracking_actor::TrackingError;
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct TrackingClient {
    inner: TableClient<DeliveryTracking>,
}

impl TrackingClient {
    pub fn new(inner: TableClient<DeliveryTracking>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DomainClient<DeliveryTracking> for TrackingClient {
    type Error = TrackingError;

    fn inner(&self) -> &TableClient<DeliveryTracking> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        TrackingError::from(e)
    }
}

impl TrackingClient {
    #[instrument(skip(self))]
    pub async fn record(&self, event: TrackingCreate) -> Result<DeliveryTracking, TrackingError> {
        debug!("Sending request");
        self.inner.insert(event).await.map_err(TrackingError::from)
    }

    /// Events of one order, oldest first.
    #[instrument(skip(self))]
    pub async fn history(&self, order_id: OrderId) -> Result<Vec<DeliveryTracking>, TrackingError> {
        self.inner
            .select(
                Query::all()
                    .filter(move |t: &DeliveryTracking| t.order_id == order_id)
                    .order_by(|a: &DeliveryTracking, b: &DeliveryTracking| {
                        a.created_at.cmp(&b.created_at)
                    }),
            )
            .await
            .map_err(TrackingError::from)
    }
}
