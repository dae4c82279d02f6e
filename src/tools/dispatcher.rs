use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use super::registry::ToolRegistry;
use crate::error::DispatchError;
use crate::types::{InvocationRequest, ToolResult};

/// Routes invocation requests to registered handlers.
///
/// Lookup, then validation against the tool's input schema, then the
/// handler call. Nothing is retried; every failure goes back to the caller.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub async fn dispatch(&self, request: &InvocationRequest) -> Result<ToolResult, DispatchError> {
        self.execute(&request.tool_name, &request.arguments).await
    }

    /// Execute a tool by name with raw JSON arguments.
    pub async fn execute(&self, name: &str, input: &Value) -> Result<ToolResult, DispatchError> {
        let tool = self.registry.get(name).ok_or_else(|| {
            warn!(tool = name, "unknown tool");
            DispatchError::UnknownTool(name.to_string())
        })?;

        let args = tool.input_schema.validate(input).inspect_err(|e| {
            warn!(tool = name, error = %e, "argument validation failed");
        })?;

        debug!(tool = name, args = args.len(), "dispatching tool call");
        tool.handler.call(&args).await.map_err(|message| {
            warn!(tool = name, error = %message, "tool handler failed");
            DispatchError::Handler {
                tool: name.to_string(),
                message,
            }
        })
    }

    /// Access the underlying registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    use crate::tools::schema::{Arguments, InputSchema, ParamType};
    use crate::tools::{ToolDef, ToolHandler};

    // --- Echo Tool ---

    struct EchoTool;

    #[async_trait]
    impl ToolHandler for EchoTool {
        async fn call(&self, args: &Arguments) -> Result<ToolResult, String> {
            Ok(ToolResult::text(args.string("msg").map_err(|e| e.to_string())?))
        }
    }

    // --- Error Tool ---

    struct ErrorTool;

    #[async_trait]
    impl ToolHandler for ErrorTool {
        async fn call(&self, _args: &Arguments) -> Result<ToolResult, String> {
            Err("tool failed".into())
        }
    }

    fn dispatcher() -> Dispatcher {
        let registry = ToolRegistry::new()
            .add(ToolDef::new(
                "echo",
                "Echo",
                "Echoes input",
                InputSchema::new().param("msg", ParamType::String),
                EchoTool,
            ))
            .unwrap()
            .add(ToolDef::new("fail", "Fail", "Always fails", InputSchema::new(), ErrorTool))
            .unwrap();
        Dispatcher::new(Arc::new(registry))
    }

    #[tokio::test]
    async fn dispatches_to_handler() {
        let d = dispatcher();
        let result = d
            .dispatch(&InvocationRequest::new("echo", json!({"msg": "hi"})))
            .await
            .unwrap();
        assert_eq!(result, ToolResult::text("hi"));
    }

    #[tokio::test]
    async fn unknown_tool() {
        let err = dispatcher()
            .execute("nope", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::UnknownTool(ref n) if n == "nope"));
    }

    #[tokio::test]
    async fn validation_runs_before_handler() {
        let err = dispatcher()
            .execute("echo", &json!({"msg": 5}))
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::Validation { ref field, .. } if field == "msg"));
    }

    #[tokio::test]
    async fn handler_failure_propagates() {
        let err = dispatcher().execute("fail", &Value::Null).await.unwrap_err();
        match err {
            DispatchError::Handler { tool, message } => {
                assert_eq!(tool, "fail");
                assert_eq!(message, "tool failed");
            }
            other => panic!("expected handler error, got {other:?}"),
        }
    }
}
