pub mod coffee_controller;
pub mod order_controller;

use crate::api::errors::ApiError;
use axum::Json;
use serde_json::{json, Value};

/// Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}
