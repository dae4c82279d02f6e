use async_trait::async_trait;
use serde::Deserialize;

use crate::tools::schema::{Arguments, InputSchema, ParamType};
use crate::tools::{ToolDef, ToolHandler};
use crate::types::ToolResult;

pub const NAME: &str = "calculate-bmi";

/// Validated input for `calculate-bmi`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiInput {
    pub weight_kg: f64,
    pub height_m: f64,
}

impl BmiInput {
    /// No range checks: a zero height yields `inf` (or `NaN` for 0/0).
    pub fn bmi(&self) -> f64 {
        self.weight_kg / (self.height_m * self.height_m)
    }
}

/// Body Mass Index, rendered with the default `f64` formatting.
pub struct CalculateBmi;

#[async_trait]
impl ToolHandler for CalculateBmi {
    async fn call(&self, args: &Arguments) -> Result<ToolResult, String> {
        let input: BmiInput = args.deserialize().map_err(|e| e.to_string())?;
        Ok(ToolResult::text(input.bmi().to_string()))
    }
}

pub fn tool() -> ToolDef {
    ToolDef::new(
        NAME,
        "BMI Calculator",
        "Calculate Body Mass Index",
        InputSchema::new()
            .param("weightKg", ParamType::Number)
            .param("heightM", ParamType::Number),
        CalculateBmi,
    )
}
