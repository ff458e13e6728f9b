// crates/sagemaker-ops-mcp/src/lib.rs
// ============================================================================
// Module: SageMaker Ops MCP
// Description: MCP server exposing SageMaker control-plane operations.
// Purpose: Provide MCP tool adapters over the SageMaker operation helpers.
// Dependencies: sagemaker-ops-contract, sagemaker-ops-core, axum, tokio
// ============================================================================

//! ## Overview
//! SageMaker Ops MCP exposes the SageMaker control plane through MCP tools
//! over stdio, HTTP, and SSE transports. All tools are thin wrappers over
//! [`sagemaker_ops_core::SageMakerClient`]: arguments are decoded from JSON,
//! exactly one operation is forwarded, and responses are enveloped for the
//! calling agent.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod server;
pub mod tools;

#[cfg(test)]
mod tests {
    //! Test-only lint relaxations for panic-based assertions and debug output.
    #![allow(
        clippy::panic,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::use_debug,
        clippy::dbg_macro,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        reason = "Test-only output and panic-based assertions are permitted."
    )]
}

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ServerConfig;
pub use config::ServerConfigError;
pub use config::ServerTransport;
pub use server::McpServer;
pub use server::McpServerError;
pub use tools::AwsClientProvider;
pub use tools::ClientProvider;
pub use tools::ToolError;
pub use tools::ToolRouter;
