use crate::framework::Record;
use crate::model::{DeliveryTracking, TrackingCreate, TrackingId};
use crate::tracking_actor::TrackingError;
use async_trait::async_trait;
use chrono::Utc;

#[derive(Debug)]
pub enum TrackingUpdate {}

#[derive(Debug)]
pub enum TrackingAction {}

#[async_trait]
impl Record for DeliveryTracking {
    const TABLE: &'static str = "delivery_tracking";
    type Id = TrackingId;
    type Create = TrackingCreate;
    type Update = TrackingUpdate;
    type Action = TrackingAction;
    type ActionResult = ();
    type Context = ();
    type Error = TrackingError;

    fn id(&self) -> &TrackingId {
        &self.id
    }

    fn from_create_params(id: TrackingId, params: TrackingCreate) -> Result<Self, TrackingError> {
        Ok(Self {
            id,
            order_id: params.order_id,
            delivery_agent_id: params.delivery_agent_id,
            status: params.status,
            created_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, update: TrackingUpdate, _ctx: &()) -> Result<(), TrackingError> {
        match update {}
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), TrackingError> {
        Err(TrackingError::AppendOnly)
    }

    async fn handle_action(&mut self, action: TrackingAction, _ctx: &()) -> Result<(), TrackingError> {
        match action {}
    }
}
