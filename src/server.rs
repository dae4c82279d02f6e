//! MCP server
//!
//! Adapts the tool registry and dispatcher to `rmcp`'s `ServerHandler`.
//! Framing, the initialize handshake and transport I/O belong to `rmcp`;
//! this module only lists tools and routes calls.

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use serde_json::Value;
use tracing::debug;

use crate::config::ServerConfig;
use crate::error::DispatchError;
use crate::tools::Dispatcher;
use crate::types::{ContentBlock, InvocationRequest, ToolResult};

/// Serves the registered tools over MCP. Cheap to clone.
#[derive(Clone)]
pub struct ToolServer {
    config: ServerConfig,
    dispatcher: Dispatcher,
}

impl ToolServer {
    pub fn new(config: ServerConfig, dispatcher: Dispatcher) -> Self {
        Self { config, dispatcher }
    }

    /// `tools/list` entries, in registration order.
    pub fn tools(&self) -> Result<Vec<Tool>, McpError> {
        self.dispatcher
            .registry()
            .definitions()
            .into_iter()
            .map(|def| {
                serde_json::from_value(def)
                    .map_err(|e| McpError::internal_error(format!("invalid tool definition: {e}"), None))
            })
            .collect()
    }

    /// Route one `tools/call`.
    ///
    /// Unknown tools and invalid arguments are protocol errors; a failing
    /// handler is a tool result with `is_error` set.
    pub async fn call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let request = InvocationRequest::new(name, arguments.map(Value::Object).unwrap_or(Value::Null));
        debug!(tool = name, "tools/call");

        match self.dispatcher.dispatch(&request).await {
            Ok(result) => Ok(to_call_result(result)),
            Err(e @ DispatchError::Handler { .. }) => {
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
            Err(e) => Err(McpError::invalid_params(e.to_string(), None)),
        }
    }
}

fn to_call_result(result: ToolResult) -> CallToolResult {
    let content = result
        .content
        .into_iter()
        .map(|block| match block {
            ContentBlock::Text { text } => Content::text(text),
        })
        .collect();
    if result.is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}

impl ServerHandler for ToolServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            // Tool titles were introduced in this revision.
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.name.clone(),
                version: self.config.version.clone(),
                ..Default::default()
            },
            instructions: Some(format!(
                "Tools: {}",
                self.dispatcher.registry().tool_names().join(", ")
            )),
        }
    }

    async fn list_tools(
        &self,
        _pagination: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tools()?,
            meta: Default::default(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.call(&request.name, request.arguments).await
    }
}
