use async_trait::async_trait;
use serde_json::{json, Value};

use super::schema::{Arguments, InputSchema};
use crate::types::ToolResult;

/// A tool's execution handler. Receives arguments already validated
/// against the tool's `InputSchema`; an `Err` is reported as a failed call.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, args: &Arguments) -> Result<ToolResult, String>;
}

/// A tool descriptor: listing metadata, input schema, and handler.
pub struct ToolDef {
    pub name: String,
    pub title: String,
    pub description: String,
    pub input_schema: InputSchema,
    pub(crate) handler: Box<dyn ToolHandler>,
}

impl ToolDef {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        input_schema: InputSchema,
        handler: impl ToolHandler + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            description: description.into(),
            input_schema,
            handler: Box::new(handler),
        }
    }

    /// Entry for a `tools/list` response.
    pub fn definition(&self) -> Value {
        json!({
            "name": self.name,
            "title": self.title,
            "description": self.description,
            "inputSchema": self.input_schema.to_json_schema(),
        })
    }
}

impl std::fmt::Debug for ToolDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDef")
            .field("name", &self.name)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}
