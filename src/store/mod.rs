//! Durable storage for orders.
//!
//! The service talks to storage only through the [`OrderStore`] trait, so the
//! backend can be swapped without touching validation:
//!
//! - [`FileOrderStore`]: one pretty-printed JSON array on disk, rewritten on every append.
//! - [`MemoryOrderStore`]: a `Vec` behind a lock, for tests and throwaway runs.
//! - [`mock::MockOrderStore`]: scripted responses for exercising error paths.
//!
//! # Scalability
//!
//! [`FileOrderStore::append`](OrderStore::append) re-reads and re-writes the whole
//! collection, so each append costs O(n) in the number of stored orders. That is
//! fine for a single coffee shop; anything bigger wants an append-only log or an
//! embedded database behind the same trait.

pub mod error;
pub mod file;
pub mod memory;
pub mod mock;

pub use error::*;
pub use file::*;
pub use memory::*;

use crate::model::Order;
use async_trait::async_trait;

/// An append-only collection of orders.
///
/// Implementations must keep insertion order: `load` after N appends returns
/// those N orders in the order the appends were applied.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Returns every stored order in insertion order.
    async fn load(&self) -> Result<Vec<Order>, StoreError>;

    /// Adds an order to the end of the collection.
    async fn append(&self, order: Order) -> Result<(), StoreError>;
}
