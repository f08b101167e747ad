//! Error types for the catalog.

use thiserror::Error;

/// Errors that can occur during catalog lookups.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No coffee with the requested id exists.
    #[error("Coffee not found: {0}")]
    NotFound(String),
}
