use async_trait::async_trait;
use rust_mcp_sdk::schema::{
    CallToolRequest, CallToolResult, ListToolsRequest, ListToolsResult, RpcError,
    schema_utils::CallToolError,
};
use rust_mcp_sdk::{McpServer, mcp_server::ServerHandler};
use std::sync::Arc;
use tracing::{debug, error};

use crate::tools::FileSystemTools;

/// fsmcp's handler for MCP messages
///
/// Stateless: every tool call builds what it needs and drops it before
/// answering, so concurrent calls share nothing.
#[derive(Debug, Default)]
pub struct FileSystemServerHandler;

impl FileSystemServerHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ServerHandler for FileSystemServerHandler {
    /// Handle ListToolsRequest - return all filesystem tools
    async fn handle_list_tools_request(
        &self,
        _request: ListToolsRequest,
        _runtime: Arc<dyn McpServer>,
    ) -> std::result::Result<ListToolsResult, RpcError> {
        let tools = FileSystemTools::tools();
        debug!("📋 Returning {} available tools", tools.len());

        Ok(ListToolsResult {
            meta: None,
            next_cursor: None,
            tools,
        })
    }

    /// Handle CallToolRequest - decode and execute the requested tool
    async fn handle_call_tool_request(
        &self,
        request: CallToolRequest,
        _runtime: Arc<dyn McpServer>,
    ) -> std::result::Result<CallToolResult, CallToolError> {
        let tool_name = request.params.name.clone();
        debug!("🛠️  Executing tool: {}", tool_name);

        let tool_params = FileSystemTools::try_from(request.params).map_err(|e| {
            error!("❌ Failed to parse parameters for {}: {}", tool_name, e);
            CallToolError::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid tool parameters: {}", e),
            ))
        })?;

        match tool_params.call_tool().await {
            Ok(call_result) => {
                debug!("✅ Tool {} completed", tool_name);
                Ok(call_result)
            }
            Err(e) => {
                error!("❌ Tool {} failed: {:#}", tool_name, e);
                Err(CallToolError::new(std::io::Error::other(format!(
                    "Tool execution failed: {}",
                    e
                ))))
            }
        }
    }
}
