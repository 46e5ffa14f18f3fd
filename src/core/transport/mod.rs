//! Transport layer for the MCP servers.
//!
//! All three servers speak MCP over standard input/output. The transport
//! owns the session lifecycle and delegates message handling to
//! [`McpServer`](crate::core::McpServer).

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
