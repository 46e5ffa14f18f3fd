//! MCP Server implementation.
//!
//! This module contains the server handler that implements the MCP protocol
//! for every profile. The tool router is built from the profile once, at
//! construction, and is read-only afterwards.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use super::profile::ServerProfile;
use crate::domains::tools::build_tool_router;

/// The MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp; tool calls
/// are dispatched by the `tool_handler` macro through `tool_router`.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        Self {
            tool_router: build_tool_router::<Self>(config.profile()),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the profile this server runs.
    pub fn profile(&self) -> ServerProfile {
        self.config.profile()
    }

    /// Names of the tools this server advertises.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            // Tools stay enabled for empty profiles so tools/list answers with [].
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_rewrite_server() {
        let server = McpServer::new(Config::for_profile(ServerProfile::BigRewrite));
        assert_eq!(server.name(), "big-rewrite");
        assert_eq!(server.version(), "1.0.0");
        assert_eq!(server.profile(), ServerProfile::BigRewrite);
        assert_eq!(server.tool_names(), vec!["big_rewrite".to_string()]);
    }

    #[test]
    fn test_servers_without_tools() {
        for profile in [ServerProfile::LocalLlm, ServerProfile::UsageTracker] {
            let server = McpServer::new(Config::for_profile(profile));
            assert!(server.tool_names().is_empty());
        }
    }

    #[test]
    fn test_get_info_reports_identity() {
        let server = McpServer::new(Config::for_profile(ServerProfile::UsageTracker));
        let info = server.get_info();

        assert_eq!(info.server_info.name, "usage-tracker");
        assert_eq!(info.server_info.version, "1.0.0");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert!(info.instructions.is_none());
    }

    #[test]
    fn test_get_info_uses_configured_name() {
        let mut config = Config::for_profile(ServerProfile::LocalLlm);
        config.server.name = "llm-sidecar".to_string();

        let server = McpServer::new(config);
        assert_eq!(server.get_info().server_info.name, "llm-sidecar");
    }
}
