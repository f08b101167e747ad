use crate::api::response::ErrorResponse;
use crate::catalog::CatalogError;
use crate::order_service::OrderError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors returned by handlers, rendered as `{"error": "..."}`.
///
/// Server-side failures carry a fixed message; the details were already
/// logged where they happened.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Client errors keep their message; storage errors become `message`.
    pub fn from_order(e: OrderError, message: &'static str) -> Self {
        if e.is_client_error() {
            ApiError::BadRequest(e.to_string())
        } else {
            ApiError::Internal(message)
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(_) => ApiError::NotFound("Coffee not found".to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_errors_map_to_status() {
        let bad = ApiError::from_order(OrderError::MissingAddress, "Failed to save order");
        assert_eq!(bad, ApiError::BadRequest("Address required for delivery".to_string()));
        assert_eq!(bad.status_code(), StatusCode::BAD_REQUEST);

        let internal = ApiError::from_order(
            OrderError::CorruptStore("orders.json: expected value".to_string()),
            "Failed to load orders",
        );
        assert_eq!(internal, ApiError::Internal("Failed to load orders"));
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unknown_coffee_message() {
        let e = ApiError::from(CatalogError::NotFound("99".to_string()));
        assert_eq!(e.to_string(), "Coffee not found");
        assert_eq!(e.status_code(), StatusCode::NOT_FOUND);
    }
}
