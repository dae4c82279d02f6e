//! Tools served by the binary.

pub mod bmi;
pub mod hello;

use super::ToolRegistry;
use crate::error::RegistryError;

pub use bmi::{BmiInput, CalculateBmi};
pub use hello::HelloWorld;

/// Registry holding every built-in tool.
pub fn registry() -> Result<ToolRegistry, RegistryError> {
    ToolRegistry::new().add(hello::tool())?.add(bmi::tool())
}
