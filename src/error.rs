//! # Error Types
//!
//! This module defines error types used throughout the recibo library.

use thiserror::Error;

/// Main error type for recibo operations
#[derive(Debug, Error)]
pub enum ReciboError {
    /// Unknown template id or unresolvable template identity
    #[error("Template error: {0}")]
    Template(String),

    /// Raster rendering error
    #[error("Render error: {0}")]
    Render(#[from] crate::render::RenderError),

    /// Contact form validation failure
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP server error
    #[error("Server error: {0}")]
    Server(String),

    /// JSON decode error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
