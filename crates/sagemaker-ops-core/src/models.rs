// crates/sagemaker-ops-core/src/models.rs
// ============================================================================
// Module: Model Operations
// Description: Forwarding helpers for hosted models.
// Purpose: List, describe, and delete models.
// Dependencies: serde_json, tracing
// ============================================================================

//! ## Overview
//! Forwarding helpers for hosted models: list, describe, and delete models.

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

/// Lists all models.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_models(client: &SageMakerClient) -> Result<Vec<Value>, ApiError> {
    info!("listing SageMaker models");
    let response = client.call("ListModels", json!({})).await?;
    Ok(take_list(response, "Models"))
}

/// Describes one model.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn describe_model(
    client: &SageMakerClient,
    model_name: &str,
) -> Result<Value, ApiError> {
    info!(model_name, "describing SageMaker model");
    client.call("DescribeModel", json!({"ModelName": model_name})).await
}

/// Deletes a model.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn delete_model(client: &SageMakerClient, model_name: &str) -> Result<(), ApiError> {
    info!(model_name, "deleting SageMaker model");
    client.call("DeleteModel", json!({"ModelName": model_name})).await?;
    info!(model_name, "model deleted");
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
