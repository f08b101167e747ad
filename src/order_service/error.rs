//! Error types for the order service.

use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur while creating or listing orders.
///
/// The first group is the caller's fault and is detected before anything is
/// written. The last two come from storage.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The body is not JSON or does not have the order shape.
    #[error("Invalid request: {0}")]
    MalformedRequest(String),

    /// No items, or an item with a bad quantity or a missing field.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// `deliveryType` is missing or not one of `deliver`, `pickup`.
    #[error("Invalid delivery type: {0:?}")]
    InvalidDeliveryType(String),

    /// A `deliver` order came without an address.
    #[error("Address required for delivery")]
    MissingAddress,

    /// `subtotal` or `total` was not sent.
    #[error("Missing amount: {0}")]
    MissingAmount(&'static str),

    /// Amounts do not add up (only checked under `TotalsPolicy::Strict`).
    #[error("Totals do not add up: subtotal {subtotal} + delivery fee {delivery_fee} != total {total}")]
    TotalsMismatch {
        subtotal: f64,
        delivery_fee: f64,
        total: f64,
    },

    /// The existing order file could not be decoded.
    #[error("Order store is corrupt: {0}")]
    CorruptStore(String),

    /// Reading or writing the order store failed.
    #[error("Order storage error: {0}")]
    StorageError(String),
}

impl OrderError {
    /// True for errors caused by the request rather than by the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, OrderError::CorruptStore(_) | OrderError::StorageError(_))
    }
}

impl From<StoreError> for OrderError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Corrupt { .. } => OrderError::CorruptStore(e.to_string()),
            other => OrderError::StorageError(other.to_string()),
        }
    }
}
