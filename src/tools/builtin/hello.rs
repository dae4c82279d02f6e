use async_trait::async_trait;

use crate::tools::schema::{Arguments, InputSchema};
use crate::tools::{ToolDef, ToolHandler};
use crate::types::ToolResult;

pub const NAME: &str = "hello_world";
pub const GREETING: &str = "Hello, World!";

/// Returns a fixed greeting. Any argument object is ignored; arguments that
/// are not an object at all still fail schema validation.
pub struct HelloWorld;

#[async_trait]
impl ToolHandler for HelloWorld {
    async fn call(&self, _args: &Arguments) -> Result<ToolResult, String> {
        Ok(ToolResult::text(GREETING))
    }
}

pub fn tool() -> ToolDef {
    ToolDef::new(
        NAME,
        "Hello World",
        "Returns a friendly greeting",
        InputSchema::new().ignore_extra(),
        HelloWorld,
    )
}
