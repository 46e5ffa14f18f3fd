//! Local LLM MCP server entry point.

use anyhow::Result;

use mcp_toolkit::core::{ServerProfile, launch};

#[tokio::main]
async fn main() -> Result<()> {
    launch(ServerProfile::LocalLlm).await?;
    Ok(())
}
