//! Big rewrite tool definition.
//!
//! Placeholder for whole-file rewrites. The tool is advertised with its final
//! input schema, but the handler only answers with a fixed message and never
//! touches the file.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the big rewrite tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BigRewriteParams {
    /// File to rewrite.
    pub file_path: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Big rewrite tool - rewrites a complete file in a single pass.
pub struct BigRewriteTool;

impl BigRewriteTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "big_rewrite";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Rewrites an entire file in one shot";

    /// Text returned until the rewrite is implemented.
    pub const PLACEHOLDER: &'static str = "Not implemented yet";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(file_path = %params.file_path))]
    pub fn execute(params: &BigRewriteParams) -> CallToolResult {
        info!("Big rewrite tool called for '{}'", params.file_path);
        CallToolResult::success(vec![Content::text(Self::PLACEHOLDER)])
    }

    /// Parse raw call arguments into tool parameters.
    pub fn parse_params(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> Result<BigRewriteParams, ToolError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<BigRewriteParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the STDIO transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params = Self::parse_params(args).map_err(McpError::from)?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
