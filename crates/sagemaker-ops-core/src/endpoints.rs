// crates/sagemaker-ops-core/src/endpoints.rs
// ============================================================================
// Module: Endpoint Operations
// Description: Forwarding helpers for endpoints and endpoint configurations.
// Purpose: List, describe, and delete inference endpoints.
// Dependencies: serde_json, tracing
// ============================================================================

//! ## Overview
//! Each helper is a single forwarding call: build the operation payload,
//! invoke it through the client, and unwrap the documented response key.
//! Remote failures propagate untouched.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;
use tracing::info;

use crate::client::SageMakerClient;
use crate::client::take_list;
use crate::error::ApiError;

// ============================================================================
// SECTION: Operations
// ============================================================================

/// Lists all endpoints in the account and region.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_endpoints(client: &SageMakerClient) -> Result<Vec<Value>, ApiError> {
    info!("listing SageMaker endpoints");
    let response = client.call("ListEndpoints", json!({})).await?;
    Ok(take_list(response, "Endpoints"))
}

/// Lists all endpoint configurations.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_endpoint_configs(client: &SageMakerClient) -> Result<Vec<Value>, ApiError> {
    info!("listing SageMaker endpoint configurations");
    let response = client.call("ListEndpointConfigs", json!({})).await?;
    Ok(take_list(response, "EndpointConfigs"))
}

/// Describes one endpoint, returning the response mapping unmodified.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn describe_endpoint(
    client: &SageMakerClient,
    endpoint_name: &str,
) -> Result<Value, ApiError> {
    info!(endpoint_name, "describing SageMaker endpoint");
    client.call("DescribeEndpoint", json!({"EndpointName": endpoint_name})).await
}

/// Describes one endpoint configuration.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn describe_endpoint_config(
    client: &SageMakerClient,
    endpoint_config_name: &str,
) -> Result<Value, ApiError> {
    info!(endpoint_config_name, "describing SageMaker endpoint configuration");
    client
        .call(
            "DescribeEndpointConfig",
            json!({"EndpointConfigName": endpoint_config_name}),
        )
        .await
}

/// Deletes an endpoint.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn delete_endpoint(
    client: &SageMakerClient,
    endpoint_name: &str,
) -> Result<(), ApiError> {
    info!(endpoint_name, "deleting SageMaker endpoint");
    client.call("DeleteEndpoint", json!({"EndpointName": endpoint_name})).await?;
    info!(endpoint_name, "endpoint deleted");
    Ok(())
}

/// Deletes an endpoint configuration.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn delete_endpoint_config(
    client: &SageMakerClient,
    endpoint_config_name: &str,
) -> Result<(), ApiError> {
    info!(endpoint_config_name, "deleting SageMaker endpoint configuration");
    client
        .call(
            "DeleteEndpointConfig",
            json!({"EndpointConfigName": endpoint_config_name}),
        )
        .await?;
    info!(endpoint_config_name, "endpoint configuration deleted");
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
