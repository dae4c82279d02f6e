use serde_json::Value;

use super::handler::ToolDef;
use crate::error::RegistryError;

/// Catalog of available tools, keyed by unique name.
///
/// Filled once at startup, then shared read-only (behind an `Arc`) with the
/// dispatcher. Tools are never removed.
pub struct ToolRegistry {
    tools: Vec<ToolDef>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool. Fails if a tool with the same name is already present.
    pub fn register(&mut self, tool: ToolDef) -> Result<(), RegistryError> {
        if self.get(&tool.name).is_some() {
            return Err(RegistryError::DuplicateName(tool.name));
        }
        self.tools.push(tool);
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn add(mut self, tool: ToolDef) -> Result<Self, RegistryError> {
        self.register(tool)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&ToolDef> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// `tools/list` entries in registration order.
    pub fn definitions(&self) -> Vec<Value> {
        self.tools.iter().map(ToolDef::definition).collect()
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
