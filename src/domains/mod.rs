//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: MCP tools advertised by the servers
//! - **files**: backup copies of files on disk
//! - **text**: line counting and token estimation
//! - **pricing**: per-provider token prices and cost calculation

pub mod files;
pub mod pricing;
pub mod text;
pub mod tools;
