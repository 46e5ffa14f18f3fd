//! Pricing domain module.
//!
//! Per-provider token prices and the cost arithmetic built on them.
//!
//! - `provider.rs` - the closed set of priced providers and their rates
//! - `cost.rs` - cost calculation (lenient and strict variants)
//! - `error.rs` - pricing error types

mod cost;
mod error;
mod provider;

pub use cost::{calculate_cost, try_calculate_cost};
pub use error::PricingError;
pub use provider::{Provider, Rates, TOKENS_PER_RATE_UNIT};
