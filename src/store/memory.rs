use super::{OrderStore, StoreError};
use crate::model::Order;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory order store. Same contract as [`FileOrderStore`](super::FileOrderStore), nothing survives a restart.
#[derive(Default)]
pub struct MemoryOrderStore {
    orders: RwLock<Vec<Order>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the store with existing orders, oldest first.
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: RwLock::new(orders),
        }
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn load(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.orders.read().await.clone())
    }

    async fn append(&self, order: Order) -> Result<(), StoreError> {
        let mut orders = self.orders.write().await;
        debug!(id = %order.id, size = orders.len() + 1, "Appended");
        orders.push(order);
        Ok(())
    }
}
