//! Pricing-specific error types.

use thiserror::Error;

/// Errors that can occur during cost calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// No rate table entry exists for the provider tag.
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),
}

impl PricingError {
    /// Create a new "unsupported provider" error.
    pub fn unsupported_provider(provider: impl Into<String>) -> Self {
        Self::UnsupportedProvider(provider.into())
    }
}
