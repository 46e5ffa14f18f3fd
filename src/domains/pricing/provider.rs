//! Priced providers and their rate table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Rates are quoted per this many tokens.
pub const TOKENS_PER_RATE_UNIT: f64 = 1_000_000.0;

/// Price per million tokens, in USD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rates {
    pub input_per_million: f64,
    pub output_per_million: f64,
}

impl Rates {
    /// Rates charged for providers missing from the table.
    pub const FREE: Rates = Rates {
        input_per_million: 0.0,
        output_per_million: 0.0,
    };

    /// Cost of a request at these rates. Counts are not validated, so
    /// negative counts produce a negative cost.
    pub fn cost(&self, input_tokens: i64, output_tokens: i64) -> f64 {
        let input_cost = input_tokens as f64 * self.input_per_million / TOKENS_PER_RATE_UNIT;
        let output_cost = output_tokens as f64 * self.output_per_million / TOKENS_PER_RATE_UNIT;
        input_cost + output_cost
    }
}

/// A provider tier with a known price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "claude-opus")]
    ClaudeOpus,
    #[serde(rename = "claude-sonnet")]
    ClaudeSonnet,
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "gpt-4")]
    Gpt4,
}

impl Provider {
    /// Every priced provider.
    pub const ALL: [Provider; 4] = [
        Self::ClaudeOpus,
        Self::ClaudeSonnet,
        Self::Gemini,
        Self::Gpt4,
    ];

    /// The tag callers use to name this provider.
    pub const fn id(self) -> &'static str {
        match self {
            Self::ClaudeOpus => "claude-opus",
            Self::ClaudeSonnet => "claude-sonnet",
            Self::Gemini => "gemini",
            Self::Gpt4 => "gpt-4",
        }
    }

    pub const fn rates(self) -> Rates {
        match self {
            Self::ClaudeOpus => Rates {
                input_per_million: 15.0,
                output_per_million: 75.0,
            },
            Self::ClaudeSonnet => Rates {
                input_per_million: 3.0,
                output_per_million: 15.0,
            },
            Self::Gemini => Rates {
                input_per_million: 1.25,
                output_per_million: 5.0,
            },
            Self::Gpt4 => Rates {
                input_per_million: 10.0,
                output_per_million: 30.0,
            },
        }
    }
}

impl FromStr for Provider {
    type Err = PricingError;

    /// Exact, case-sensitive match on the provider tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| PricingError::unsupported_provider(s))
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
