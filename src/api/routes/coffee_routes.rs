use crate::api::controllers::coffee_controller;
use crate::api::AppState;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(coffee_controller::get_all_coffees))
        .route("/{id}", get(coffee_controller::get_coffee_by_id))
}
