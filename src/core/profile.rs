//! Server profiles.
//!
//! Every binary in this crate serves exactly one profile. A profile is a
//! static registration table: the identity reported to MCP clients and the
//! set of tools advertised for the whole lifetime of the process.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domains::tools::definitions::BigRewriteTool;

/// The three MCP servers shipped by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServerProfile {
    /// Whole-file rewrite server. Advertises the `big_rewrite` tool.
    BigRewrite,

    /// Local language-model server. No tools registered yet.
    LocalLlm,

    /// Token usage tracking server. No tools registered yet.
    UsageTracker,
}

impl ServerProfile {
    /// All profiles, in declaration order.
    pub const ALL: [ServerProfile; 3] = [Self::BigRewrite, Self::LocalLlm, Self::UsageTracker];

    /// Implementation name reported during MCP initialization.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BigRewrite => "big-rewrite",
            Self::LocalLlm => "local-llm",
            Self::UsageTracker => "usage-tracker",
        }
    }

    /// Human-readable name used in the start-up log line.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BigRewrite => "Big Rewrite",
            Self::LocalLlm => "Local LLM",
            Self::UsageTracker => "Usage Tracker",
        }
    }

    /// Names of the tools this profile advertises.
    pub const fn tool_names(self) -> &'static [&'static str] {
        match self {
            Self::BigRewrite => &[BigRewriteTool::NAME],
            Self::LocalLlm | Self::UsageTracker => &[],
        }
    }
}

impl fmt::Display for ServerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
