//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Verbosity comes from `RUST_LOG`. The output uses the compact format without
//! module paths (`with_target(false)`); entries carry structured fields such as
//! `id` and `count` instead.
//!
//! ```bash
//! # Requests and order creation
//! RUST_LOG=info cargo run
//!
//! # Full request payloads and store reads
//! RUST_LOG=debug cargo run
//!
//! # Per-request spans from the HTTP layer
//! RUST_LOG=coffee_orders=debug,tower_http=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Requests**: one span per HTTP request (`tower_http::trace`)
//! - **Orders**: `create_order` and `list_orders` spans, rejected payloads at `warn`
//! - **Store**: loads and appends with the file path and collection size
//! - **Errors**: storage failures at `error` with the underlying cause
//!
//! With `RUST_LOG=info`, placing one order looks like:
//!
//! ```text
//! INFO create_order:append: Appended id=4f1c... path=data/orders.json size=3
//! INFO create_order: Order created id=4f1c... items=2 delivery_type=deliver
//! ```

/// Initializes the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
