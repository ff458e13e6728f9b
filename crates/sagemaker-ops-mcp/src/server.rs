// crates/sagemaker-ops-mcp/src/server.rs
// ============================================================================
// Module: MCP Server
// Description: MCP server implementations for stdio, HTTP, and SSE transports.
// Purpose: Expose SageMaker operation tools via JSON-RPC 2.0.
// Dependencies: sagemaker-ops-core, axum, tokio
// ============================================================================

//! ## Overview
//! The MCP server exposes SageMaker operation tools using JSON-RPC 2.0. It
//! supports stdio, HTTP, and SSE transports and always routes calls through
//! [`crate::tools::ToolRouter`]. Inputs are untrusted: bodies are capped
//! before parsing and tool arguments are validated by the router.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Sse;
use axum::response::sse::Event;
use axum::routing::post;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWrite;
use tokio::io::AsyncWriteExt;
use tokio::io::BufReader;
use tokio_stream::wrappers::ReceiverStream;

use crate::config::ServerConfig;
use crate::config::ServerTransport;
use crate::tools::ToolDefinition;
use crate::tools::ToolError;
use crate::tools::ToolRouter;

// ============================================================================
// SECTION: MCP Server
// ============================================================================

/// MCP server instance.
pub struct McpServer {
    /// Server configuration.
    config: ServerConfig,
    /// Tool router for request dispatch.
    router: ToolRouter,
}

impl McpServer {
    /// Builds a new MCP server from configuration and a router.
    #[must_use]
    pub fn new(config: ServerConfig, router: ToolRouter) -> Self {
        Self {
            config,
            router,
        }
    }

    /// Serves requests using the configured transport.
    ///
    /// # Errors
    ///
    /// Returns [`McpServerError`] when the server fails.
    pub async fn serve(self) -> Result<(), McpServerError> {
        match self.config.transport {
            ServerTransport::Stdio => {
                serve_stdio(&self.router, self.config.max_body_bytes).await
            }
            ServerTransport::Http => serve_http(self.config, self.router).await,
            ServerTransport::Sse => serve_sse(self.config, self.router).await,
        }
    }
}

// ============================================================================
// SECTION: Stdio Transport
// ============================================================================

/// Serves JSON-RPC requests over stdin/stdout.
async fn serve_stdio(router: &ToolRouter, max_body_bytes: usize) -> Result<(), McpServerError> {
    let mut reader = BufReader::new(tokio::io::stdin());
    let mut writer = tokio::io::stdout();
    loop {
        let bytes = read_framed(&mut reader, max_body_bytes).await?;
        let request: JsonRpcRequest = serde_json::from_slice(&bytes)
            .map_err(|_| McpServerError::Transport("invalid json-rpc request".to_string()))?;
        let response = handle_request(router, request).await;
        let payload = serde_json::to_vec(&response.1)
            .map_err(|_| McpServerError::Transport("json-rpc serialization failed".to_string()))?;
        write_framed(&mut writer, &payload).await?;
    }
}

// ============================================================================
// SECTION: HTTP Transport
// ============================================================================

/// Serves JSON-RPC requests over HTTP.
async fn serve_http(config: ServerConfig, router: ToolRouter) -> Result<(), McpServerError> {
    let state = server_state(&config, router)?;
    let addr = bind_address(&config)?;
    let app = Router::new().route("/rpc", post(handle_http)).with_state(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|_| McpServerError::Transport("http bind failed".to_string()))?;
    axum::serve(listener, app)
        .await
        .map_err(|_| McpServerError::Transport("http server failed".to_string()))
}

/// Serves JSON-RPC requests over SSE.
async fn serve_sse(config: ServerConfig, router: ToolRouter) -> Result<(), McpServerError> {
    let state = server_state(&config, router)?;
    let addr = bind_address(&config)?;
    let app = Router::new().route("/rpc", post(handle_sse)).with_state(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|_| McpServerError::Transport("sse bind failed".to_string()))?;
    axum::serve(listener, app)
        .await
        .map_err(|_| McpServerError::Transport("sse server failed".to_string()))
}

/// Shared server state for HTTP/SSE handlers.
#[derive(Clone)]
struct ServerState {
    /// Tool router for request dispatch.
    router: ToolRouter,
    /// Maximum allowed request body size.
    max_body_bytes: usize,
}

/// Builds the shared handler state.
fn server_state(
    config: &ServerConfig,
    router: ToolRouter,
) -> Result<Arc<ServerState>, McpServerError> {
    Ok(Arc::new(ServerState {
        router,
        max_body_bytes: config.max_body_bytes,
    }))
}

/// Parses the configured bind address.
fn bind_address(config: &ServerConfig) -> Result<SocketAddr, McpServerError> {
    let bind = config
        .bind
        .as_ref()
        .ok_or_else(|| McpServerError::Config("bind address required".to_string()))?;
    bind.parse().map_err(|_| McpServerError::Config("invalid bind address".to_string()))
}

/// Handles HTTP JSON-RPC requests.
async fn handle_http(State(state): State<Arc<ServerState>>, bytes: Bytes) -> impl IntoResponse {
    let response = parse_request(&state, &bytes).await;
    (response.0, axum::Json(response.1))
}

/// Handles SSE JSON-RPC requests.
async fn handle_sse(State(state): State<Arc<ServerState>>, bytes: Bytes) -> impl IntoResponse {
    let response = parse_request(&state, &bytes).await;
    let (tx, rx) = tokio::sync::mpsc::channel::<Result<Event, Infallible>>(1);
    let payload = serde_json::to_string(&response.1).unwrap_or_else(|_| {
        "{\"jsonrpc\":\"2.0\",\"id\":null,\"error\":{\"code\":-32060,\"message\":\"serialization \
         failed\"}}"
            .to_string()
    });
    let _ = tx.send(Ok(Event::default().data(payload))).await;
    Sse::new(ReceiverStream::new(rx))
}

// ============================================================================
// SECTION: JSON-RPC Handling
// ============================================================================

/// Incoming JSON-RPC request payload.
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    /// JSON-RPC protocol version.
    jsonrpc: String,
    /// Request identifier.
    id: Value,
    /// Method name.
    method: String,
    /// Optional parameters payload.
    params: Option<Value>,
}

/// JSON-RPC response envelope.
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    /// JSON-RPC protocol version.
    jsonrpc: &'static str,
    /// Request identifier.
    id: Value,
    /// Successful result payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    /// Error payload when the request fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

/// JSON-RPC error payload.
#[derive(Debug, Serialize)]
struct JsonRpcError {
    /// Error code.
    code: i64,
    /// Human-readable error message.
    message: String,
}

/// Tool call parameters for JSON-RPC requests.
#[derive(Debug, Deserialize)]
struct ToolCallParams {
    /// Tool name.
    name: String,
    /// Raw JSON arguments.
    #[serde(default)]
    arguments: Value,
}

/// Tool list response payload.
#[derive(Debug, Serialize)]
struct ToolListResult {
    /// Registered tool definitions.
    tools: Vec<ToolDefinition>,
}

/// Tool call response payload.
#[derive(Debug, Serialize)]
struct ToolCallResult {
    /// Tool output content.
    content: Vec<ToolContent>,
}

/// Tool output payloads for JSON-RPC responses.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ToolContent {
    /// JSON tool output.
    Json {
        /// JSON payload.
        json: Value,
    },
}

/// Dispatches a JSON-RPC request to the tool router.
async fn handle_request(
    router: &ToolRouter,
    request: JsonRpcRequest,
) -> (StatusCode, JsonRpcResponse) {
    if request.jsonrpc != "2.0" {
        return (
            StatusCode::BAD_REQUEST,
            JsonRpcResponse {
                jsonrpc: "2.0",
                id: request.id,
                result: None,
                error: Some(JsonRpcError {
                    code: -32600,
                    message: "invalid json-rpc version".to_string(),
                }),
            },
        );
    }
    match request.method.as_str() {
        "tools/list" => match serde_json::to_value(ToolListResult {
            tools: router.list_tools(),
        }) {
            Ok(value) => (
                StatusCode::OK,
                JsonRpcResponse {
                    jsonrpc: "2.0",
                    id: request.id,
                    result: Some(value),
                    error: None,
                },
            ),
            Err(_) => jsonrpc_error(request.id, ToolError::Serialization),
        },
        "tools/call" => {
            let id = request.id;
            let params = request.params.unwrap_or(Value::Null);
            match serde_json::from_value::<ToolCallParams>(params) {
                Ok(call) => match router.handle_tool_call(&call.name, call.arguments).await {
                    Ok(result) => match serde_json::to_value(ToolCallResult {
                        content: vec![ToolContent::Json {
                            json: result,
                        }],
                    }) {
                        Ok(value) => (
                            StatusCode::OK,
                            JsonRpcResponse {
                                jsonrpc: "2.0",
                                id,
                                result: Some(value),
                                error: None,
                            },
                        ),
                        Err(_) => jsonrpc_error(id, ToolError::Serialization),
                    },
                    Err(err) => jsonrpc_error(id, err),
                },
                Err(_) => (
                    StatusCode::BAD_REQUEST,
                    JsonRpcResponse {
                        jsonrpc: "2.0",
                        id,
                        result: None,
                        error: Some(JsonRpcError {
                            code: -32602,
                            message: "invalid tool params".to_string(),
                        }),
                    },
                ),
            }
        }
        _ => (
            StatusCode::BAD_REQUEST,
            JsonRpcResponse {
                jsonrpc: "2.0",
                id: request.id,
                result: None,
                error: Some(JsonRpcError {
                    code: -32601,
                    message: "method not found".to_string(),
                }),
            },
        ),
    }
}

/// Parses and validates a JSON-RPC request payload.
async fn parse_request(state: &ServerState, bytes: &Bytes) -> (StatusCode, JsonRpcResponse) {
    if bytes.len() > state.max_body_bytes {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            JsonRpcResponse {
                jsonrpc: "2.0",
                id: Value::Null,
                result: None,
                error: Some(JsonRpcError {
                    code: -32070,
                    message: "request body too large".to_string(),
                }),
            },
        );
    }
    match serde_json::from_slice::<JsonRpcRequest>(bytes.as_ref()) {
        Ok(request) => handle_request(&state.router, request).await,
        Err(_) => (
            StatusCode::BAD_REQUEST,
            JsonRpcResponse {
                jsonrpc: "2.0",
                id: Value::Null,
                result: None,
                error: Some(JsonRpcError {
                    code: -32600,
                    message: "invalid json-rpc request".to_string(),
                }),
            },
        ),
    }
}

/// Builds a JSON-RPC error response for a tool failure.
fn jsonrpc_error(id: Value, error: ToolError) -> (StatusCode, JsonRpcResponse) {
    let (status, code, message) = match error {
        ToolError::UnknownTool => (StatusCode::BAD_REQUEST, -32601, "unknown tool".to_string()),
        ToolError::InvalidParams(message) => (StatusCode::BAD_REQUEST, -32602, message),
        ToolError::Operation(message) => (StatusCode::OK, -32000, message),
        ToolError::Serialization => (StatusCode::OK, -32060, "serialization failed".to_string()),
    };
    (
        status,
        JsonRpcResponse {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message,
            }),
        },
    )
}

// ============================================================================
// SECTION: Framing Helpers
// ============================================================================

/// Reads a framed stdio payload using MCP Content-Length headers.
async fn read_framed(
    reader: &mut (impl AsyncBufRead + Unpin),
    max_body_bytes: usize,
) -> Result<Vec<u8>, McpServerError> {
    let mut content_length: Option<usize> = None;
    let mut line = String::new();
    loop {
        line.clear();
        let bytes = reader
            .read_line(&mut line)
            .await
            .map_err(|_| McpServerError::Transport("stdio read failed".to_string()))?;
        if bytes == 0 {
            return Err(McpServerError::Transport("stdio closed".to_string()));
        }
        if line.trim().is_empty() {
            break;
        }
        if let Some(value) = line.strip_prefix("Content-Length:") {
            let parsed = value
                .trim()
                .parse::<usize>()
                .map_err(|_| McpServerError::Transport("invalid content length".to_string()))?;
            content_length = Some(parsed);
        }
    }
    let len = content_length
        .ok_or_else(|| McpServerError::Transport("missing content length".to_string()))?;
    if len > max_body_bytes {
        return Err(McpServerError::Transport("payload too large".to_string()));
    }
    let mut buf = vec![0u8; len];
    reader
        .read_exact(&mut buf)
        .await
        .map_err(|_| McpServerError::Transport("stdio read failed".to_string()))?;
    Ok(buf)
}

/// Writes a framed stdio payload using MCP Content-Length headers.
async fn write_framed(
    writer: &mut (impl AsyncWrite + Unpin),
    payload: &[u8],
) -> Result<(), McpServerError> {
    let header = format!("Content-Length: {}\r\n\r\n", payload.len());
    writer
        .write_all(header.as_bytes())
        .await
        .map_err(|_| McpServerError::Transport("stdio write failed".to_string()))?;
    writer
        .write_all(payload)
        .await
        .map_err(|_| McpServerError::Transport("stdio write failed".to_string()))?;
    writer
        .flush()
        .await
        .map_err(|_| McpServerError::Transport("stdio write failed".to_string()))
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// MCP server errors.
#[derive(Debug, thiserror::Error)]
pub enum McpServerError {
    /// Configuration errors.
    #[error("config error: {0}")]
    Config(String),
    /// Transport errors.
    #[error("transport error: {0}")]
    Transport(String),
}

// ============================================================================
// SECTION: Tests
// ============================================================================
