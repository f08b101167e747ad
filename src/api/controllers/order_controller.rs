use crate::api::errors::ApiError;
use crate::api::response::{CreatedResponse, DataResponse, OrderSummary};
use crate::api::AppState;
use crate::model::Order;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

/// Create a new order
///
/// The body is taken raw so that undecodable JSON is reported through the
/// same error type as every other validation failure.
pub async fn create_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedResponse<OrderSummary>>), ApiError> {
    let order = state
        .orders
        .create_order_from_json(&body)
        .await
        .map_err(|e| ApiError::from_order(e, "Failed to save order"))?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(OrderSummary::from(order), "Order created")),
    ))
}

/// Get all orders
pub async fn get_all_orders(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Order>>>, ApiError> {
    let orders = state
        .orders
        .list_orders()
        .await
        .map_err(|e| ApiError::from_order(e, "Failed to load orders"))?;

    Ok(Json(DataResponse::new(orders)))
}
