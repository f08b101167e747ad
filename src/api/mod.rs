//! HTTP surface: routing, CORS, request tracing and JSON envelopes.
//!
//! Handlers are thin. Catalog reads go straight to [`crate::catalog`]; order
//! reads and writes go through the [`OrderService`] held in [`AppState`].

pub mod controllers;
pub mod errors;
pub mod response;
pub mod routes;

use crate::order_service::OrderService;
use axum::http::{header, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderService,
}

impl AppState {
    pub fn new(orders: OrderService) -> Self {
        Self { orders }
    }
}

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(controllers::health))
        .nest("/api/coffees", routes::coffee_routes::routes())
        .nest("/api/orders", routes::order_routes::routes())
        .fallback(controllers::not_found)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any origin may call the API; the mobile app and its web build both do.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH])
}
