//! Tools domain module.
//!
//! Tools are executable functions that MCP clients can call. Which tools a
//! server exposes is fixed by its [`ServerProfile`](crate::core::ServerProfile).
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder for the STDIO transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params, execute(), to_tool() and create_route()
//! 3. Export in `definitions/mod.rs`
//! 4. List the tool name under its profile in `core/profile.rs`
//! 5. Add the route in `router.rs`

pub mod definitions;
mod error;
pub mod router;

pub use error::ToolError;
pub use router::build_tool_router;
