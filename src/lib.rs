//! # Coffee Orders
//!
//! > **A small HTTP backend for a coffee shop app.**
//!
//! Serves a fixed menu and accepts orders, which are appended to a JSON file on
//! disk.
//!
//! ## 🏗️ Design
//!
//! ### Where the logic lives
//! Almost everything here is wiring. The one piece with real behavior is the
//! order path: validate the payload, assign an id, and append the order to the
//! store without losing concurrent writes.
//!
//! ### Concurrency Model
//! Every request runs in its own Tokio task. The only shared mutable state is
//! the order file, guarded by a single reader/writer lock inside
//! [`FileOrderStore`](store::FileOrderStore): reads share it, appends take it
//! exclusively for the whole load-modify-write cycle.
//!
//! ### Observability
//! `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Plain serde types: [`Product`](model::Product), [`Order`](model::Order) and the
//! request payloads. JSON field names are camelCase.
//!
//! ### 2. The Menu ([`catalog`])
//! Compiled-in products with lookup by id.
//!
//! ### 3. The Store ([`store`])
//! The [`OrderStore`](store::OrderStore) trait and its file, memory and mock
//! implementations.
//!
//! ### 4. The Rules ([`order_service`])
//! [`OrderService`](order_service::OrderService) validates requests (see
//! [`order_service::validation`]) and hands valid orders to the store.
//!
//! ### 5. The Surface ([`api`])
//! axum router, handlers and JSON envelopes.
//!
//! ### 6. The Orchestrator ([`lifecycle`])
//! Config, tracing setup, and [`Backend`](lifecycle::Backend), which wires it
//! all together and serves it.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! curl localhost:8080/api/coffees/2
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod api;
pub mod catalog;
pub mod lifecycle;
pub mod model;
pub mod order_service;
pub mod store;
