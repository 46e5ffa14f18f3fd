//! Big Rewrite MCP server entry point.

use anyhow::Result;

use mcp_toolkit::core::{ServerProfile, launch};

#[tokio::main]
async fn main() -> Result<()> {
    launch(ServerProfile::BigRewrite).await?;
    Ok(())
}
