// crates/sagemaker-ops-mcp/src/config.rs
// ============================================================================
// Module: Server Configuration
// Description: Environment-driven configuration for the MCP server.
// Purpose: Select the transport and its limits without config files.
// Dependencies: sagemaker-ops-core, thiserror
// ============================================================================

//! ## Overview
//! All server configuration comes from environment variables, read through
//! the same [`Environment`] snapshot the core crate uses, so configuration
//! parsing stays pure and testable. Unset variables fall back to the stdio
//! transport with a 1 MiB body limit; the bind address is validated lazily
//! by the transport that needs it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use sagemaker_ops_core::Environment;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable selecting the server transport.
pub const TRANSPORT_ENV: &str = "SAGEMAKER_MCP_TRANSPORT";
/// Environment variable naming the bind address for http/sse transports.
pub const BIND_ENV: &str = "SAGEMAKER_MCP_BIND";
/// Environment variable capping the request body size in bytes.
pub const MAX_BODY_BYTES_ENV: &str = "SAGEMAKER_MCP_MAX_BODY_BYTES";
/// Default request body cap: 1 MiB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1_048_576;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Transport the server listens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerTransport {
    /// JSON-RPC over stdin/stdout with Content-Length framing.
    Stdio,
    /// JSON-RPC over HTTP POST.
    Http,
    /// JSON-RPC over HTTP POST with SSE responses.
    Sse,
}

impl ServerTransport {
    /// Parses a transport name.
    fn parse(name: &str) -> Option<Self> {
        match name {
            "stdio" => Some(Self::Stdio),
            "http" => Some(Self::Http),
            "sse" => Some(Self::Sse),
            _ => None,
        }
    }
}

/// Server configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Transport to serve on.
    pub transport: ServerTransport,
    /// Bind address, required by the http and sse transports.
    pub bind: Option<String>,
    /// Maximum allowed request body size in bytes.
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Resolves server configuration from an environment snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ServerConfigError`] when a variable is set to an
    /// unrecognized or unparsable value.
    pub fn from_env(env: &Environment) -> Result<Self, ServerConfigError> {
        let transport = match env.get(TRANSPORT_ENV) {
            None => ServerTransport::Stdio,
            Some(name) => ServerTransport::parse(name)
                .ok_or_else(|| ServerConfigError::InvalidTransport(name.to_string()))?,
        };
        let max_body_bytes = match env.get(MAX_BODY_BYTES_ENV) {
            None => DEFAULT_MAX_BODY_BYTES,
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| ServerConfigError::InvalidBodyLimit(raw.to_string()))?,
        };
        Ok(Self {
            transport,
            bind: env.get(BIND_ENV).map(str::to_string),
            max_body_bytes,
        })
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Server configuration errors.
#[derive(Debug, Error)]
pub enum ServerConfigError {
    /// The transport variable names an unknown transport.
    #[error("unknown transport {0:?}; expected stdio, http, or sse")]
    InvalidTransport(String),
    /// The body-limit variable is not a positive integer.
    #[error("invalid body limit {0:?}; expected a byte count")]
    InvalidBodyLimit(String),
}

// ============================================================================
// SECTION: Tests
// ============================================================================
