// crates/sagemaker-ops-mcp/src/main.rs
// ============================================================================
// Module: SageMaker Ops MCP Server Binary
// Description: MCP server runner for SageMaker operations.
// Purpose: Resolve configuration, wire the router, and serve the transport.
// Dependencies: sagemaker-ops-mcp, tokio, tracing-subscriber
// ============================================================================

//! MCP server binary exposing SageMaker control-plane tools.

use std::sync::Arc;

use sagemaker_ops_core::Environment;
use sagemaker_ops_mcp::AwsClientProvider;
use sagemaker_ops_mcp::McpServer;
use sagemaker_ops_mcp::McpServerError;
use sagemaker_ops_mcp::ServerConfig;
use sagemaker_ops_mcp::ToolRouter;
use tracing_subscriber::EnvFilter;

/// Installs the tracing subscriber on stderr.
///
/// Stdout is reserved for the stdio transport's framed responses, so all
/// diagnostics go to stderr.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point: resolves configuration and serves the selected transport.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), McpServerError> {
    init_tracing();
    let config = ServerConfig::from_env(&Environment::capture())
        .map_err(|err| McpServerError::Config(err.to_string()))?;
    let router = ToolRouter::new(Arc::new(AwsClientProvider));
    McpServer::new(config, router).serve().await
}
