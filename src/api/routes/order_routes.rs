use crate::api::controllers::order_controller;
use crate::api::AppState;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(order_controller::get_all_orders).post(order_controller::create_order),
    )
}
