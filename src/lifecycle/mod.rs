//! Runtime orchestration and lifecycle management.
//!
//! This module contains everything needed to turn the library into a running
//! server:
//!
//! - **Configuration**: [`Config`] read from the environment
//! - **Observability setup**: [`setup_tracing`]
//! - **Wiring and serving**: [`Backend`] builds store, service and router, then
//!   serves until shut down

pub mod backend;
pub mod config;
pub mod tracing;

pub use backend::*;
pub use config::*;
pub use self::tracing::*;
