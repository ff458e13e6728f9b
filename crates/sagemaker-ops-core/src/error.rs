// crates/sagemaker-ops-core/src/error.rs
// ============================================================================
// Module: Core Errors
// Description: Error taxonomy for session resolution and control-plane calls.
// Purpose: Separate configuration failures from remote operation failures.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Two error kinds cover the whole core crate: [`ConfigError`] for
//! environment-derived configuration that is missing or unusable, and
//! [`ApiError`] for anything that goes wrong between building a request and
//! decoding the control plane's response. Helpers never catch [`ApiError`];
//! the adapter layer converts it into the single user-facing tool error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Configuration Errors
// ============================================================================

/// Configuration failures raised before any remote call is attempted.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    #[error("{name} environment variable is not set")]
    MissingEnv {
        /// Name of the missing environment variable.
        name: &'static str,
    },
    /// Session or client construction failed.
    ///
    /// The message never includes credential material.
    #[error("failed to create AWS session: {0}")]
    Session(String),
}

// ============================================================================
// SECTION: Remote Operation Errors
// ============================================================================

/// Failures surfaced by a single control-plane call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Configuration resolution failed before the call was issued.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Credential resolution through the provider chain failed.
    #[error("failed to resolve AWS credentials: {0}")]
    Credentials(String),
    /// SigV4 request signing failed.
    #[error("request signing failed: {0}")]
    Signing(String),
    /// The HTTP exchange itself failed.
    #[error("transport error: {0}")]
    Transport(String),
    /// The service rejected the request.
    #[error("{code}: {message}")]
    Service {
        /// Service error code, e.g. `ValidationException`.
        code: String,
        /// Service-supplied error message.
        message: String,
    },
    /// The response body could not be encoded or decoded.
    #[error("invalid response payload: {0}")]
    Payload(String),
}
