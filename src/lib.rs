pub mod config;
pub mod error;
pub mod server;
pub mod tools;
pub mod types;

pub use config::ServerConfig;
pub use error::{DispatchError, RegistryError};
pub use server::ToolServer;
pub use tools::{
    Arguments, Dispatcher, InputSchema, ParamType, ToolDef, ToolHandler, ToolRegistry,
};
pub use types::{ContentBlock, InvocationRequest, ToolResult};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(Arc::new(tools::builtin::registry().unwrap()))
    }

    async fn call(name: &str, args: serde_json::Value) -> Result<ToolResult, DispatchError> {
        dispatcher()
            .dispatch(&InvocationRequest::new(name, args))
            .await
    }

    #[tokio::test]
    async fn every_builtin_answers_with_text() {
        let d = dispatcher();
        let valid = [
            ("hello_world", json!({})),
            ("calculate-bmi", json!({"weightKg": 80, "heightM": 1.8})),
        ];
        assert_eq!(d.registry().len(), valid.len());
        for (name, args) in valid {
            let result = d.execute(name, &args).await.unwrap();
            assert!(!result.is_error, "{name} reported an error");
            assert_eq!(result.content.len(), 1);
            assert!(matches!(&result.content[0], ContentBlock::Text { text } if !text.is_empty()));
        }
    }

    #[tokio::test]
    async fn unregistered_name_is_unknown_tool() {
        for name in ["", "hello-world", "calculate_bmi", "HELLO_WORLD"] {
            let err = call(name, json!({})).await.unwrap_err();
            assert!(matches!(err, DispatchError::UnknownTool(ref n) if n == name));
        }
    }

    #[tokio::test]
    async fn hello_world_ignores_arguments() {
        for args in [json!(null), json!({}), json!({"who": "you", "n": 3})] {
            let result = call("hello_world", args).await.unwrap();
            assert_eq!(result.joined_text(), "Hello, World!");
        }
    }

    #[tokio::test]
    async fn bmi_reference_value() {
        let result = call("calculate-bmi", json!({"weightKg": 70, "heightM": 1.75}))
            .await
            .unwrap();
        assert_eq!(result.joined_text(), "22.857142857142858");
    }

    #[tokio::test]
    async fn bmi_zero_height_is_non_finite() {
        let result = call("calculate-bmi", json!({"weightKg": 70, "heightM": 0}))
            .await
            .unwrap();
        let value: f64 = result.joined_text().parse().unwrap();
        assert!(!value.is_finite());
    }

    #[tokio::test]
    async fn bmi_missing_height_names_field() {
        let err = call("calculate-bmi", json!({"weightKg": 70}))
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::Validation { ref field, .. } if field == "heightM"));
    }

    #[test]
    fn builtin_names_cannot_be_registered_twice() {
        let mut registry = tools::builtin::registry().unwrap();
        let err = registry
            .register(tools::builtin::hello::tool())
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(ref n) if n == "hello_world"));
    }
}
