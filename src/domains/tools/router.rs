//! Tool Router - builds the rmcp ToolRouter for a server profile.
//!
//! Each tool knows how to create its own route; this module only picks the
//! routes a profile advertises.

use rmcp::handler::server::tool::ToolRouter;

use crate::core::profile::ServerProfile;

use super::definitions::BigRewriteTool;

/// Build the tool router for `profile`.
///
/// Called once at start-up; the router is never modified afterwards.
pub fn build_tool_router<S>(profile: ServerProfile) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    match profile {
        ServerProfile::BigRewrite => ToolRouter::new().with_route(BigRewriteTool::create_route()),
        ServerProfile::LocalLlm | ServerProfile::UsageTracker => ToolRouter::new(),
    }
}
