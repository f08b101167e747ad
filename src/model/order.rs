//! Customer orders as they are persisted and returned by the API.
//!
//! Orders are created exactly once, by [`OrderService::create_order`](crate::order_service::OrderService::create_order),
//! and never updated afterwards. Line prices and names are snapshots supplied by
//! the client at order time, not re-derived from the catalog.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub Uuid);

impl OrderId {
    /// Generates a fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for OrderId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    Deliver,
    Pickup,
}

impl DeliveryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryType::Deliver => "deliver",
            DeliveryType::Pickup => "pickup",
        }
    }

    /// Whether this delivery type needs a [`DeliveryAddress`].
    pub fn requires_address(&self) -> bool {
        matches!(self, DeliveryType::Deliver)
    }
}

impl FromStr for DeliveryType {
    type Err = ();

    // Exact match only: "Deliver" or " pickup" are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deliver" => Ok(DeliveryType::Deliver),
            "pickup" => Ok(DeliveryType::Pickup),
            _ => Err(()),
        }
    }
}

impl Display for DeliveryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order statuses. Only the initial one exists; nothing here moves an order on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
        }
    }
}

/// A single line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Catalog id of the coffee. Not checked against the catalog.
    pub coffee_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: BigDecimal,
    pub size: String,
    pub quantity: u32,
}

/// Where a `deliver` order goes. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub street: String,
    pub full_address: String,
    pub city: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<OrderLine>,
    pub delivery_type: DeliveryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<DeliveryAddress>,
    pub subtotal: f64,
    #[serde(default)]
    pub delivery_fee: f64,
    pub total: f64,
    pub status: OrderStatus,
}

// =============================================================================
// Request payloads
// =============================================================================

/// Payload for creating a new order, as sent by the client.
///
/// Every field the validator reports on individually is optional here, so that
/// a missing `size` is an invalid item rather than an undecodable body. Only
/// `items` must be present for the payload to decode at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<OrderLineRequest>,
    pub delivery_type: Option<String>,
    pub address: Option<DeliveryAddress>,
    pub subtotal: Option<f64>,
    pub delivery_fee: Option<f64>,
    pub total: Option<f64>,
}

/// Payload for a single line of [`CreateOrderRequest`].
///
/// `price` must be a JSON string such as `"3.53"`. A number would pass through
/// `f64` and lose the exact value the client priced the line at.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub coffee_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub price: Option<BigDecimal>,
    pub size: Option<String>,
    pub quantity: Option<i64>,
}
