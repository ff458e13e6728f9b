// crates/sagemaker-ops-core/src/mlflow.rs
// ============================================================================
// Module: MLflow Tracking Server Operations
// Description: Forwarding helpers for managed MLflow tracking servers.
// Purpose: Manage tracking server lifecycle and presigned access URLs.
// Dependencies: serde, serde_json, tracing
// ============================================================================

//! ## Overview
//! Tracking servers are the one resource whose creation needs an execution
//! role: it is resolved from the client's environment exactly once, before
//! the remote call, so a missing role fails fast as a configuration error.
//! Start and stop return the raw response mapping since the control plane
//! reports the server's new state there.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;
use tracing::info;

use crate::client::SageMakerClient;
use crate::client::take_list;
use crate::client::take_string;
use crate::error::ApiError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default lifetime of presigned URLs, in seconds.
pub const DEFAULT_PRESIGNED_URL_EXPIRATION_SECS: u64 = 3_600;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Capacity tier of a managed tracking server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TrackingServerSize {
    /// Up to 25 concurrent users.
    Small,
    /// Up to 50 concurrent users.
    Medium,
    /// Up to 100 concurrent users.
    Large,
}

impl TrackingServerSize {
    /// Wire name of the size tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

// ============================================================================
// SECTION: Operations
// ============================================================================

/// Lists all managed MLflow tracking servers.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_mlflow_tracking_servers(
    client: &SageMakerClient,
) -> Result<Vec<Value>, ApiError> {
    info!("listing MLflow tracking servers");
    let response = client.call("ListMlflowTrackingServers", json!({})).await?;
    Ok(take_list(response, "TrackingServerSummaries"))
}

/// Creates a managed MLflow tracking server and returns its ARN.
///
/// The execution role is resolved from the client's environment before the
/// remote call; a missing role aborts without touching the control plane.
///
/// # Errors
///
/// Returns [`ApiError::Config`] when the execution role is unset, or any
/// [`ApiError`] from the control plane.
pub async fn create_mlflow_tracking_server(
    client: &SageMakerClient,
    tracking_server_name: &str,
    artifact_store_uri: &str,
    tracking_server_size: TrackingServerSize,
) -> Result<String, ApiError> {
    let role_arn = client.execution_role()?;
    info!(tracking_server_name, "creating MLflow tracking server");
    let response = client
        .call(
            "CreateMlflowTrackingServer",
            json!({
                "TrackingServerName": tracking_server_name,
                "ArtifactStoreUri": artifact_store_uri,
                "TrackingServerSize": tracking_server_size.as_str(),
                "RoleArn": role_arn,
            }),
        )
        .await?;
    info!(tracking_server_name, "MLflow tracking server created");
    Ok(take_string(response, "TrackingServerArn"))
}

/// Creates a presigned URL for accessing a tracking server.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn create_presigned_mlflow_tracking_server_url(
    client: &SageMakerClient,
    tracking_server_name: &str,
    expiration_seconds: Option<u64>,
) -> Result<String, ApiError> {
    info!(tracking_server_name, "creating presigned URL for MLflow tracking server");
    let response = client
        .call(
            "CreatePresignedMlflowTrackingServerUrl",
            json!({
                "TrackingServerName": tracking_server_name,
                "ExpirationSeconds":
                    expiration_seconds.unwrap_or(DEFAULT_PRESIGNED_URL_EXPIRATION_SECS),
            }),
        )
        .await?;
    Ok(take_string(response, "PresignedUrl"))
}

/// Describes one tracking server.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn describe_mlflow_tracking_server(
    client: &SageMakerClient,
    tracking_server_name: &str,
) -> Result<Value, ApiError> {
    info!(tracking_server_name, "describing MLflow tracking server");
    client
        .call(
            "DescribeMlflowTrackingServer",
            json!({"TrackingServerName": tracking_server_name}),
        )
        .await
}

/// Starts a stopped tracking server, returning the raw response.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn start_mlflow_tracking_server(
    client: &SageMakerClient,
    tracking_server_name: &str,
) -> Result<Value, ApiError> {
    info!(tracking_server_name, "starting MLflow tracking server");
    client
        .call(
            "StartMlflowTrackingServer",
            json!({"TrackingServerName": tracking_server_name}),
        )
        .await
}

/// Stops a running tracking server, returning the raw response.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn stop_mlflow_tracking_server(
    client: &SageMakerClient,
    tracking_server_name: &str,
) -> Result<Value, ApiError> {
    info!(tracking_server_name, "stopping MLflow tracking server");
    client
        .call(
            "StopMlflowTrackingServer",
            json!({"TrackingServerName": tracking_server_name}),
        )
        .await
}

/// Deletes a tracking server.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn delete_mlflow_tracking_server(
    client: &SageMakerClient,
    tracking_server_name: &str,
) -> Result<(), ApiError> {
    info!(tracking_server_name, "deleting MLflow tracking server");
    client
        .call(
            "DeleteMlflowTrackingServer",
            json!({"TrackingServerName": tracking_server_name}),
        )
        .await?;
    info!(tracking_server_name, "MLflow tracking server deleted");
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
