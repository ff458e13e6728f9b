// crates/sagemaker-ops-core/src/client.rs
// ============================================================================
// Module: SageMaker Client
// Description: SigV4-signed JSON transport for the SageMaker control plane.
// Purpose: Issue control-plane operations and decode their JSON responses.
// Dependencies: aws-sigv4, aws-credential-types, reqwest, http, serde_json
// ============================================================================

//! ## Overview
//! The control plane speaks `application/x-amz-json-1.1` over HTTPS: every
//! operation is a POST to the regional API endpoint with an `X-Amz-Target`
//! header naming the operation and a SigV4 signature over the request. The
//! [`SageMakerTransport`] trait is the seam between that wire protocol and
//! the operation helpers; production uses [`SigV4Transport`] while tests
//! substitute a canned-response stub. [`SageMakerClient`] pairs a transport
//! with the [`Environment`] snapshot it was resolved from so role lookup
//! stays consistent with the session that produced the client.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::time::SystemTime;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_credential_types::provider::ProvideCredentials;
use aws_sigv4::http_request::SignableBody;
use aws_sigv4::http_request::SignableRequest;
use aws_sigv4::http_request::SigningSettings;
use aws_sigv4::http_request::sign;
use aws_sigv4::sign::v4;
use aws_smithy_runtime_api::client::identity::Identity;
use serde_json::Map;
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;
use crate::error::ConfigError;
use crate::session::Environment;
use crate::session::resolve_execution_role;
use crate::session::resolve_session;
use crate::session::session_settings;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Signing name of the SageMaker control-plane service.
const SERVICE_NAME: &str = "sagemaker";
/// Wire content type for control-plane requests.
const CONTENT_TYPE: &str = "application/x-amz-json-1.1";
/// Response header carrying the service error type on rejected requests.
const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

// ============================================================================
// SECTION: Transport Seam
// ============================================================================

/// Wire-level access to the SageMaker control plane.
///
/// Implementations take a fully-formed operation name and JSON payload and
/// return the decoded response body verbatim.
#[async_trait]
pub trait SageMakerTransport: Send + Sync {
    /// Invokes one control-plane operation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when signing, the HTTP exchange, or response
    /// decoding fails, or when the service rejects the request.
    async fn invoke(&self, operation: &str, payload: Value) -> Result<Value, ApiError>;
}

// ============================================================================
// SECTION: SigV4 Transport
// ============================================================================

/// Production transport signing requests with SigV4.
pub struct SigV4Transport {
    /// HTTP client used for every exchange.
    http: reqwest::Client,
    /// Resolved AWS shared configuration supplying credentials.
    config: SdkConfig,
    /// Region the endpoint and signature are bound to.
    region: String,
    /// Regional control-plane endpoint URL.
    endpoint: String,
}

impl SigV4Transport {
    /// Builds a transport bound to the given configuration and region.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Session`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: SdkConfig, region: String) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| ConfigError::Session(err.to_string()))?;
        let endpoint = format!("https://api.{SERVICE_NAME}.{region}.amazonaws.com");
        Ok(Self {
            http,
            config,
            region,
            endpoint,
        })
    }

    /// Resolves credentials from the provider chain into a signing identity.
    async fn identity(&self) -> Result<Identity, ApiError> {
        let provider = self
            .config
            .credentials_provider()
            .ok_or_else(|| ApiError::Credentials("no credentials provider configured".to_string()))?;
        let credentials = provider
            .provide_credentials()
            .await
            .map_err(|err| ApiError::Credentials(err.to_string()))?;
        Ok(credentials.into())
    }

    /// Builds and signs one operation request.
    fn signed_request(
        &self,
        identity: &Identity,
        operation: &str,
        body: Vec<u8>,
    ) -> Result<http::Request<Vec<u8>>, ApiError> {
        let mut request = http::Request::builder()
            .method("POST")
            .uri(&self.endpoint)
            .header("content-type", CONTENT_TYPE)
            .header("x-amz-target", format!("SageMaker.{operation}"))
            .body(body)
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let params: aws_sigv4::http_request::SigningParams<'_> = v4::SigningParams::builder()
            .identity(identity)
            .region(&self.region)
            .name(SERVICE_NAME)
            .time(SystemTime::now())
            .settings(SigningSettings::default())
            .build()
            .map_err(|err| ApiError::Signing(err.to_string()))?
            .into();
        let signable = SignableRequest::new(
            "POST",
            self.endpoint.clone(),
            request
                .headers()
                .iter()
                .map(|(name, value)| (name.as_str(), value.to_str().unwrap_or_default())),
            SignableBody::Bytes(request.body()),
        )
        .map_err(|err| ApiError::Signing(err.to_string()))?;
        let (instructions, _signature) = sign(signable, &params)
            .map_err(|err| ApiError::Signing(err.to_string()))?
            .into_parts();
        instructions.apply_to_request_http1x(&mut request);
        Ok(request)
    }
}

#[async_trait]
impl SageMakerTransport for SigV4Transport {
    async fn invoke(&self, operation: &str, payload: Value) -> Result<Value, ApiError> {
        let body = serde_json::to_vec(&payload).map_err(|err| ApiError::Payload(err.to_string()))?;
        let identity = self.identity().await?;
        let request = self.signed_request(&identity, operation, body)?;
        let request =
            reqwest::Request::try_from(request).map_err(|err| ApiError::Transport(err.to_string()))?;

        debug!(operation, region = %self.region, "invoking control-plane operation");
        let response = self
            .http
            .execute(request)
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = response.status();
        let error_type = response
            .headers()
            .get(ERROR_TYPE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(service_error(status.as_u16(), error_type, &bytes));
        }
        if bytes.is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        serde_json::from_slice(&bytes).map_err(|err| ApiError::Payload(err.to_string()))
    }
}

/// Decodes a rejected response into [`ApiError::Service`].
///
/// The error type is taken from the `x-amzn-errortype` header when present,
/// else from the body's `__type` field; both carry namespace prefixes and
/// trailing metadata that are stripped down to the bare exception name.
fn service_error(status: u16, error_type: Option<String>, body: &[u8]) -> ApiError {
    let parsed: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
    let code = error_type
        .or_else(|| {
            parsed
                .get("__type")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .map_or_else(
            || format!("HTTP{status}"),
            |raw| trim_error_type(&raw).to_string(),
        );
    let message = parsed
        .get("message")
        .or_else(|| parsed.get("Message"))
        .and_then(Value::as_str)
        .unwrap_or("request rejected by service")
        .to_string();
    ApiError::Service { code, message }
}

/// Strips the namespace prefix and metadata suffix from a service error type.
fn trim_error_type(raw: &str) -> &str {
    let after_hash = raw.rsplit('#').next().unwrap_or(raw);
    after_hash.split(':').next().unwrap_or(after_hash)
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Handle pairing a transport with the environment it was resolved from.
#[derive(Clone)]
pub struct SageMakerClient {
    /// Transport carrying operations to the control plane.
    transport: Arc<dyn SageMakerTransport>,
    /// Environment snapshot the client was resolved against.
    env: Environment,
}

impl SageMakerClient {
    /// Wraps a transport and the environment snapshot it belongs to.
    #[must_use]
    pub fn new(transport: Arc<dyn SageMakerTransport>, env: Environment) -> Self {
        Self { transport, env }
    }

    /// Invokes one control-plane operation through the transport.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] raised by the transport.
    pub async fn call(&self, operation: &str, payload: Value) -> Result<Value, ApiError> {
        self.transport.invoke(operation, payload).await
    }

    /// Resolves the SageMaker execution role from this client's environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] when the role variable is unset.
    pub fn execution_role(&self) -> Result<String, ConfigError> {
        resolve_execution_role(&self.env)
    }
}

/// Resolves a production client from the environment.
///
/// A fresh session is loaded on every call; nothing is cached between
/// resolutions.
///
/// # Errors
///
/// Returns [`ConfigError::Session`] when the transport cannot be built.
pub async fn resolve_client(
    env: &Environment,
    region_override: Option<&str>,
) -> Result<SageMakerClient, ConfigError> {
    let settings = session_settings(env, region_override);
    let config = resolve_session(env, region_override).await;
    let transport = SigV4Transport::new(config, settings.region)?;
    Ok(SageMakerClient::new(Arc::new(transport), env.clone()))
}

// ============================================================================
// SECTION: Response Decoding
// ============================================================================

/// Removes the named array from a response, defaulting to empty when the key
/// is absent or not an array.
pub(crate) fn take_list(mut response: Value, key: &str) -> Vec<Value> {
    match response.get_mut(key).map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

/// Removes the named string from a response, defaulting to empty when the
/// key is absent or not a string.
pub(crate) fn take_string(mut response: Value, key: &str) -> String {
    match response.get_mut(key).map(Value::take) {
        Some(Value::String(text)) => text,
        _ => String::new(),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
