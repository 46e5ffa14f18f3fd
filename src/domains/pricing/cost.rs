//! Cost calculation.

use tracing::debug;

use super::error::PricingError;
use super::provider::{Provider, Rates};

/// Estimated cost in USD of `input_tokens` in and `output_tokens` out on
/// `provider`.
///
/// Unknown provider tags cost `0.0`, which is indistinguishable from a free
/// request. Use [`try_calculate_cost`] when the difference matters.
pub fn calculate_cost(input_tokens: i64, output_tokens: i64, provider: &str) -> f64 {
    let rates = match provider.parse::<Provider>() {
        Ok(p) => p.rates(),
        Err(e) => {
            debug!("{}; pricing as free", e);
            Rates::FREE
        }
    };
    rates.cost(input_tokens, output_tokens)
}

/// Like [`calculate_cost`], but rejects provider tags missing from the
/// rate table.
pub fn try_calculate_cost(
    input_tokens: i64,
    output_tokens: i64,
    provider: &str,
) -> Result<f64, PricingError> {
    let provider: Provider = provider.parse()?;
    Ok(provider.rates().cost(input_tokens, output_tokens))
}
