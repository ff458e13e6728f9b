// crates/sagemaker-ops-core/src/testing.rs
// ============================================================================
// Module: Test Support
// Description: In-memory transport double for exercising operation helpers.
// Purpose: Let tests script control-plane responses and inspect requests.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! [`StubTransport`] replaces the SigV4 transport in tests. Responses are
//! queued per operation name and every invocation is recorded, so tests can
//! assert both the payload a helper sent and how it decoded what came back.
//! The module ships in the library (not behind `cfg(test)`) so downstream
//! crates can drive their own routers against it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::client::SageMakerClient;
use crate::client::SageMakerTransport;
use crate::error::ApiError;
use crate::session::Environment;

// ============================================================================
// SECTION: Stub Transport
// ============================================================================

/// One recorded transport invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Operation name as sent on the wire.
    pub operation: String,
    /// JSON payload the helper built.
    pub payload: Value,
}

/// Shared mutable state behind a cloneable stub handle.
#[derive(Default)]
struct StubState {
    /// Scripted responses, consumed front-to-back per operation.
    responses: HashMap<String, VecDeque<Result<Value, ApiError>>>,
    /// Every invocation seen, in order.
    calls: Vec<RecordedCall>,
}

/// Scriptable in-memory transport.
#[derive(Clone, Default)]
pub struct StubTransport {
    /// Interior state shared between the handle and the client holding it.
    state: Arc<Mutex<StubState>>,
}

impl StubTransport {
    /// Creates an empty stub with no scripted responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response for an operation.
    pub fn respond(&self, operation: &str, response: Value) {
        if let Ok(mut state) = self.state.lock() {
            state
                .responses
                .entry(operation.to_string())
                .or_default()
                .push_back(Ok(response));
        }
    }

    /// Queues a failure for an operation.
    pub fn fail(&self, operation: &str, error: ApiError) {
        if let Ok(mut state) = self.state.lock() {
            state
                .responses
                .entry(operation.to_string())
                .or_default()
                .push_back(Err(error));
        }
    }

    /// Returns every invocation recorded so far.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().map(|state| state.calls.clone()).unwrap_or_default()
    }

    /// Wraps this stub in a client bound to the given environment snapshot.
    #[must_use]
    pub fn client(&self, env: Environment) -> SageMakerClient {
        SageMakerClient::new(Arc::new(self.clone()), env)
    }
}

#[async_trait]
impl SageMakerTransport for StubTransport {
    async fn invoke(&self, operation: &str, payload: Value) -> Result<Value, ApiError> {
        let scripted = self.state.lock().ok().and_then(|mut state| {
            state.calls.push(RecordedCall {
                operation: operation.to_string(),
                payload,
            });
            state
                .responses
                .get_mut(operation)
                .and_then(VecDeque::pop_front)
        });
        scripted.unwrap_or_else(|| {
            Err(ApiError::Transport(format!(
                "no scripted response for {operation}"
            )))
        })
    }
}
