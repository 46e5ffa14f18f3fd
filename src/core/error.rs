//! Error types and handling for the MCP toolkit.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and the transport layer.

use thiserror::Error;

/// A specialized Result type for toolkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP toolkit.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the files domain.
    #[error("Backup error: {0}")]
    Backup(#[from] crate::domains::files::BackupError),

    /// Error originating from the pricing domain.
    #[error("Pricing error: {0}")]
    Pricing(#[from] crate::domains::pricing::PricingError),

    /// Error raised while serving the MCP session.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
