//! MCP Toolkit Library
//!
//! Three Model Context Protocol (MCP) tool servers served over stdio, plus
//! the small helpers they share.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, server profiles, the MCP server
//!   handler and the stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: MCP tools advertised by the servers
//!   - **files**: backup copies of files
//!   - **text**: line counting and token estimation
//!   - **pricing**: provider rate table and cost calculation
//!
//! # Example
//!
//! ```rust,no_run
//! use mcp_toolkit::core::{ServerProfile, launch};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     launch(ServerProfile::BigRewrite).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use self::core::{Config, Error, McpServer, Result, ServerProfile};
pub use domains::files::create_backup;
pub use domains::pricing::calculate_cost;
pub use domains::text::{count_lines, estimate_tokens};
