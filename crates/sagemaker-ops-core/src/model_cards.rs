// crates/sagemaker-ops-core/src/model_cards.rs
// ============================================================================
// Module: Model Card Operations
// Description: Forwarding helpers for model cards, versions, and export jobs.
// Purpose: List, describe, and delete model governance records.
// Dependencies: serde_json, tracing
// ============================================================================

//! ## Overview
//! Forwarding helpers for model cards, their versions, and export jobs:
//! list, describe, and delete model governance records.

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

/// Lists all model cards.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_model_cards(client: &SageMakerClient) -> Result<Vec<Value>, ApiError> {
    info!("listing SageMaker model cards");
    let response = client.call("ListModelCards", json!({})).await?;
    Ok(take_list(response, "ModelCardSummaries"))
}

/// Lists the export jobs of one model card.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_model_card_export_jobs(
    client: &SageMakerClient,
    model_card_name: &str,
) -> Result<Vec<Value>, ApiError> {
    info!(model_card_name, "listing model card export jobs");
    let response = client
        .call(
            "ListModelCardExportJobs",
            json!({"ModelCardName": model_card_name}),
        )
        .await?;
    Ok(take_list(response, "ModelCardExportJobSummaries"))
}

/// Lists the versions of one model card.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_model_card_versions(
    client: &SageMakerClient,
    model_card_name: &str,
) -> Result<Vec<Value>, ApiError> {
    info!(model_card_name, "listing model card versions");
    let response = client
        .call(
            "ListModelCardVersions",
            json!({"ModelCardName": model_card_name}),
        )
        .await?;
    Ok(take_list(response, "ModelCardVersionSummaryList"))
}

/// Describes one model card.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn describe_model_card(
    client: &SageMakerClient,
    model_card_name: &str,
) -> Result<Value, ApiError> {
    info!(model_card_name, "describing SageMaker model card");
    client
        .call("DescribeModelCard", json!({"ModelCardName": model_card_name}))
        .await
}

/// Deletes a model card.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn delete_model_card(
    client: &SageMakerClient,
    model_card_name: &str,
) -> Result<(), ApiError> {
    info!(model_card_name, "deleting SageMaker model card");
    client
        .call("DeleteModelCard", json!({"ModelCardName": model_card_name}))
        .await?;
    info!(model_card_name, "model card deleted");
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
