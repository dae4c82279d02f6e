/// Server identity reported during `initialize`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "hello-mcp".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

impl ServerConfig {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
