//! Stdio tool server.
//!
//! Usage:
//!   hello-mcp
//!   hello-mcp --name my-server --log-filter debug
//!
//! Speaks MCP over stdin/stdout. Logs go to stderr.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use hello_mcp::tools::builtin;
use hello_mcp::{Dispatcher, ServerConfig, ToolServer};
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hello-mcp", version, about = "Serve hello_world and calculate-bmi over stdio")]
struct Cli {
    /// Server name reported during initialize
    #[arg(long)]
    name: Option<String>,

    /// Tracing filter directive (defaults to RUST_LOG, then "info")
    #[arg(long)]
    log_filter: Option<String>,
}

fn init_tracing(directive: Option<&str>) {
    let filter = match directive {
        Some(d) => EnvFilter::new(d),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_filter.as_deref());

    let mut config = ServerConfig::default();
    if let Some(name) = cli.name {
        config = config.with_name(name);
    }

    let registry = builtin::registry().context("failed to register built-in tools")?;
    info!(tools = ?registry.tool_names(), "registered tools");
    let server = ToolServer::new(config, Dispatcher::new(Arc::new(registry)));

    info!("serving on stdio");
    let service = server
        .serve(stdio())
        .await
        .map_err(|e| anyhow::anyhow!("failed to start MCP service: {e:?}"))?;

    tokio::select! {
        quit = service.waiting() => {
            let reason = quit.context("MCP service failed")?;
            info!(?reason, "server stopped");
        }
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = signal {
                warn!(error = %e, "failed to listen for ctrl-c");
            }
            info!("shutdown requested");
        }
    }
    Ok(())
}
