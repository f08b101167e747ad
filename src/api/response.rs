use crate::model::{DeliveryType, Order, OrderId, OrderLine, OrderStatus};
use serde::Serialize;

/// `{"data": ...}` envelope used by every successful read.
#[derive(Serialize, Debug, Clone)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// `{"data": ..., "message": ...}` envelope for `201 Created`.
#[derive(Serialize, Debug, Clone)]
pub struct CreatedResponse<T> {
    pub data: T,
    pub message: String,
}

impl<T> CreatedResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
}

/// What the client gets back after placing an order. The address is not echoed.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: OrderId,
    pub items: Vec<OrderLine>,
    pub delivery_type: DeliveryType,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub status: OrderStatus,
}

impl From<Order> for OrderSummary {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            items: order.items,
            delivery_type: order.delivery_type,
            subtotal: order.subtotal,
            delivery_fee: order.delivery_fee,
            total: order.total,
            status: order.status,
        }
    }
}
