//! Pure data structures shared by the catalog, the order service and the store.

pub mod order;
pub mod product;

pub use order::*;
pub use product::*;
