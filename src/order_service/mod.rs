//! Order creation and listing.
//!
//! [`OrderService`] sits between the HTTP handlers and the [`OrderStore`]. It
//! owns an order from validation until the store accepts it.

pub mod error;
pub mod validation;

pub use error::*;
pub use validation::{TotalsPolicy, ValidatedOrder};

use crate::model::{CreateOrderRequest, Order, OrderId, OrderStatus};
use crate::store::OrderStore;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Validates order requests and hands them to an [`OrderStore`].
///
/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    totals: TotalsPolicy,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>, totals: TotalsPolicy) -> Self {
        Self { store, totals }
    }

    /// Decodes a raw JSON body and creates the order.
    pub async fn create_order_from_json(&self, body: &[u8]) -> Result<Order, OrderError> {
        let request = validation::decode_request(body).inspect_err(|e| {
            warn!(error = %e, "Rejected order");
        })?;
        self.create_order(request).await
    }

    /// Validates the request, assigns an id and `pending` status, and persists it.
    ///
    /// Nothing is written unless every check passes. The store write runs in its
    /// own task: once it has started it completes even if the caller goes away.
    #[instrument(skip(self, request))]
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        debug!(?request, "create_order called");

        let valid = validation::validate(request, self.totals).inspect_err(|e| {
            warn!(error = %e, "Rejected order");
        })?;

        let order = Order {
            id: OrderId::generate(),
            items: valid.items,
            delivery_type: valid.delivery_type,
            address: valid.address,
            subtotal: valid.subtotal,
            delivery_fee: valid.delivery_fee,
            total: valid.total,
            status: OrderStatus::Pending,
        };

        let store = self.store.clone();
        let pending = order.clone();
        tokio::spawn(async move { store.append(pending).await })
            .await
            .map_err(|e| OrderError::StorageError(e.to_string()))?
            .inspect_err(|e| error!(id = %order.id, error = %e, "Failed to save order"))?;

        info!(id = %order.id, items = order.items.len(), delivery_type = %order.delivery_type, "Order created");
        Ok(order)
    }

    /// Returns every stored order in insertion order.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self
            .store
            .load()
            .await
            .inspect_err(|e| error!(error = %e, "Failed to load orders"))?;
        debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }
}
