//! # Order Client
//!
//! High-level API over the Order table: placement, the lifecycle transitions and the scoped
//! order queries the views load from. Validation and side effects run inside the order table
//! actor (`on_create` / `handle_action`); this client only builds requests and maps errors.
use crate::framework::{DomainClient, Filter, Query, StoreError, TableClient};
use crate::model::{Order, OrderCreate, OrderId, Principal};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct OrderClient {
    inner: TableClient<Order>,
}

impl OrderClient {
    pub fn new(inner: TableClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DomainClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &TableClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        OrderError::from(e)
    }
}

impl OrderClient {
    /// Places an order together with its lines.
    #[instrument(skip(self, params), fields(customer = %params.customer_id, restaurant = %params.restaurant_id))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "place_order called");
        info!("Sending place_order to actor");
        self.inner.insert(params).await.map_err(OrderError::from)
    }

    async fn transition(&self, id: OrderId, action: OrderAction) -> Result<Order, OrderError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(OrderError::from)
    }

    #[instrument(skip(self))]
    pub async fn accept(&self, id: OrderId, by: Principal) -> Result<Order, OrderError> {
        self.transition(id, OrderAction::Accept { by }).await
    }

    #[instrument(skip(self))]
    pub async fn reject(&self, id: OrderId, by: Principal) -> Result<Order, OrderError> {
        self.transition(id, OrderAction::Reject { by }).await
    }

    #[instrument(skip(self))]
    pub async fn start_preparing(&self, id: OrderId, by: Principal) -> Result<Order, OrderError> {
        self.transition(id, OrderAction::StartPreparing { by }).await
    }

    #[instrument(skip(self))]
    pub async fn mark_ready(&self, id: OrderId, by: Principal) -> Result<Order, OrderError> {
        self.transition(id, OrderAction::MarkReady { by }).await
    }

    /// Assigns an unassigned `ready` order to a delivery agent and issues its OTP.
    #[instrument(skip(self))]
    pub async fn claim(&self, id: OrderId, by: Principal) -> Result<Order, OrderError> {
        self.transition(id, OrderAction::Claim { by }).await
    }

    /// Completes delivery if `otp` matches the code issued at claim time.
    #[instrument(skip(self, otp))]
    pub async fn confirm_delivery(
        &self,
        id: OrderId,
        by: Principal,
        otp: &str,
    ) -> Result<Order, OrderError> {
        self.transition(
            id,
            OrderAction::ConfirmDelivery {
                by,
                otp: otp.to_string(),
            },
        )
        .await
    }

    /// Orders matching `scope`, newest first.
    #[instrument(skip(self, scope))]
    pub async fn scoped(&self, scope: Filter<Order>) -> Result<Vec<Order>, OrderError> {
        self.inner
            .select(
                Query::all()
                    .with_filter(scope)
                    .order_by_desc(|a: &Order, b: &Order| a.created_at.cmp(&b.created_at)),
            )
            .await
            .map_err(OrderError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action};
    use crate::model::{ProfileId, Role};

    #[tokio::test]
    async fn test_claim_sends_claim_action() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let orders = OrderClient::new(client);
        let order_id = OrderId::new();
        let agent = Principal {
            id: ProfileId::new(),
            role: Role::DeliveryAgent,
        };

        let task = tokio::spawn(async move { orders.claim(order_id, agent).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, order_id);
        match action {
            OrderAction::Claim { by } => assert_eq!(by, agent),
            other => panic!("Expected Claim, got {other:?}"),
        }

        responder
            .send(Err(StoreError::Rejected(Box::new(OrderError::AlreadyClaimed))))
            .unwrap();
        let result = task.await.unwrap();
        assert!(matches!(result, Err(OrderError::AlreadyClaimed)));
    }

    #[tokio::test]
    async fn test_confirm_delivery_forwards_code() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let orders = OrderClient::new(client);
        let customer = Principal {
            id: ProfileId::new(),
            role: Role::Customer,
        };

        let task =
            tokio::spawn(async move { orders.confirm_delivery(OrderId::new(), customer, "123456").await });

        let (_, action, responder) = expect_action(&mut receiver).await.unwrap();
        match action {
            OrderAction::ConfirmDelivery { otp, .. } => assert_eq!(otp, "123456"),
            other => panic!("Expected ConfirmDelivery, got {other:?}"),
        }
        drop(responder);

        // a dropped responder surfaces as a communication error
        let result = task.await.unwrap();
        assert!(matches!(result, Err(OrderError::ActorCommunicationError(_))));
    }
}
