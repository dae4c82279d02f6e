/// Raised while building the tool registry. Fatal to startup.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("tool already registered: {0}")]
    DuplicateName(String),
}

/// Raised while routing a single tool invocation. Reported to the caller.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("invalid argument `{field}`: {reason}")]
    Validation { field: String, reason: String },
    #[error("tool `{tool}` failed: {message}")]
    Handler { tool: String, message: String },
}

impl DispatchError {
    pub(crate) fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
