use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

use crate::error::DispatchError;

/// Primitive type a tool parameter is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// Any JSON number, integral or not.
    Number,
    Integer,
    String,
}

impl ParamType {
    fn as_str(self) -> &'static str {
        match self {
            ParamType::Number => "number",
            ParamType::Integer => "integer",
            ParamType::String => "string",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            ParamType::Number => value.is_number(),
            ParamType::Integer => value.is_i64() || value.is_u64(),
            ParamType::String => value.is_string(),
        }
    }
}

impl std::fmt::Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Declared inputs of a tool. Every declared parameter is required.
#[derive(Debug, Clone, Default)]
pub struct InputSchema {
    params: Vec<(String, ParamType)>,
    ignore_extra: bool,
}

impl InputSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a required parameter. Declaration order is kept for listings.
    pub fn param(mut self, name: impl Into<String>, ty: ParamType) -> Self {
        self.params.push((name.into(), ty));
        self
    }

    /// Drop undeclared fields instead of rejecting them.
    pub fn ignore_extra(mut self) -> Self {
        self.ignore_extra = true;
        self
    }

    fn declared(&self, name: &str) -> Option<ParamType> {
        self.params.iter().find(|(n, _)| n == name).map(|(_, t)| *t)
    }

    /// Check raw call arguments against the declared parameters.
    ///
    /// `null` counts as an empty object. Missing fields, wrong types and
    /// (unless `ignore_extra` is set) undeclared fields are rejected with a
    /// `Validation` error naming the field.
    pub fn validate(&self, input: &Value) -> Result<Arguments, DispatchError> {
        let empty = Map::new();
        let obj = match input {
            Value::Null => &empty,
            Value::Object(map) => map,
            other => {
                return Err(DispatchError::validation(
                    "arguments",
                    format!("expected object, got {}", json_type_name(other)),
                ))
            }
        };

        let mut values = Map::new();
        for (name, ty) in &self.params {
            let value = obj
                .get(name)
                .ok_or_else(|| DispatchError::validation(name, "required"))?;
            if !ty.matches(value) {
                return Err(DispatchError::validation(
                    name,
                    format!("expected {ty}, got {}", json_type_name(value)),
                ));
            }
            values.insert(name.clone(), value.clone());
        }

        if !self.ignore_extra {
            if let Some(extra) = obj.keys().find(|k| self.declared(k).is_none()) {
                return Err(DispatchError::validation(extra, "unexpected field"));
            }
        }

        Ok(Arguments { values })
    }

    /// JSON Schema rendering used in `tools/list`.
    pub fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|(name, ty)| (name.clone(), json!({ "type": ty.as_str() })))
            .collect();
        let required: Vec<&str> = self.params.iter().map(|(n, _)| n.as_str()).collect();

        let mut schema = json!({
            "type": "object",
            "properties": properties,
            "additionalProperties": self.ignore_extra,
        });
        if !required.is_empty() {
            schema["required"] = json!(required);
        }
        schema
    }
}

/// Arguments that passed validation against an `InputSchema`.
///
/// Only declared parameters are retained, each guaranteed to match its type.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    values: Map<String, Value>,
}

impl Arguments {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn number(&self, name: &str) -> Result<f64, DispatchError> {
        self.get(name)
            .and_then(Value::as_f64)
            .ok_or_else(|| DispatchError::validation(name, "expected number"))
    }

    pub fn integer(&self, name: &str) -> Result<i64, DispatchError> {
        self.get(name)
            .and_then(Value::as_i64)
            .ok_or_else(|| DispatchError::validation(name, "expected integer"))
    }

    pub fn string(&self, name: &str) -> Result<&str, DispatchError> {
        self.get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| DispatchError::validation(name, "expected string"))
    }

    /// Decode into a typed per-tool record.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, DispatchError> {
        serde_json::from_value(Value::Object(self.values.clone()))
            .map_err(|e| DispatchError::validation("arguments", e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}
