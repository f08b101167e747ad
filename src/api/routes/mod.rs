pub mod coffee_routes;
pub mod order_routes;
