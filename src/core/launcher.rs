//! Shared start-up sequence for the server binaries.

use tracing::{debug, info};

use super::config::Config;
use super::error::Result;
use super::logging::{STARTUP_TARGET, init_logging};
use super::profile::ServerProfile;
use super::server::McpServer;
use super::transport::StdioTransport;

/// Start the MCP server for `profile` and serve it over stdio.
///
/// Returns once the client closes the session.
pub async fn launch(profile: ServerProfile) -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env(profile);

    init_logging(&config.logging);

    let server = McpServer::new(config);
    info!(target: STARTUP_TARGET, "{}", startup_message(profile));
    debug!(
        "Serving {} v{} with {} tool(s)",
        server.name(),
        server.version(),
        server.tool_names().len()
    );

    StdioTransport::run(server).await?;

    info!("Server shutting down");
    Ok(())
}

/// The line announcing that a server is up.
fn startup_message(profile: ServerProfile) -> String {
    format!("{} MCP Server started", profile.display_name())
}
