//! # OrderItem Client
use crate::framework::{DomainClient, Query, StoreError, TableClient};
use crate::model::{OrderId, OrderItem, OrderItemCreate, OrderLine};
use crate::order_item_actor::OrderItemError;
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct OrderItemClient {
    inner: TableClient<OrderItem>,
}

impl OrderItemClient {
    pub fn new(inner: TableClient<OrderItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DomainClient<OrderItem> for OrderItemClient {
    type Error = OrderItemError;

    fn inner(&self) -> &TableClient<OrderItem> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        OrderItemError::from(e)
    }
}

impl OrderItemClient {
    /// Writes every line of an order in one all-or-nothing batch.
    #[instrument(skip(self, lines), fields(count = lines.len()))]
    pub async fn add_lines(
        &self,
        order_id: OrderId,
        lines: Vec<OrderLine>,
    ) -> Result<Vec<OrderItem>, OrderItemError> {
        debug!("Sending request");
        let rows = lines
            .into_iter()
            .map(|line| OrderItemCreate { order_id, line })
            .collect();
        self.inner.insert_many(rows).await.map_err(OrderItemError::from)
    }

    #[instrument(skip(self))]
    pub async fn for_order(&self, order_id: OrderId) -> Result<Vec<OrderItem>, OrderItemError> {
        self.inner
            .select(Query::all().filter(move |i: &OrderItem| i.order_id == order_id))
            .await
            .map_err(OrderItemError::from)
    }
}
