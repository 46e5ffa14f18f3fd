//! Core module containing shared infrastructure components.
//!
//! Configuration, error handling, server profiles, the MCP server handler,
//! the stdio transport and the start-up sequence shared by all binaries.

pub mod config;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod profile;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use launcher::launch;
pub use profile::ServerProfile;
pub use server::McpServer;
pub use transport::{StdioTransport, TransportError};
