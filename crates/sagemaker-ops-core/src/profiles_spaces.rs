// crates/sagemaker-ops-core/src/profiles_spaces.rs
// ============================================================================
// Module: Profile & Space Operations
// Description: Forwarding helpers for user profiles and shared spaces.
// Purpose: Enumerate Studio users and collaborative spaces.
// Dependencies: serde_json, tracing
// ============================================================================

//! ## Overview
//! Forwarding helpers for user profiles and shared spaces: enumerate
//! Studio users and collaborative spaces.

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

/// Lists all user profiles.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_user_profiles(client: &SageMakerClient) -> Result<Vec<Value>, ApiError> {
    info!("listing SageMaker user profiles");
    let response = client.call("ListUserProfiles", json!({})).await?;
    Ok(take_list(response, "UserProfiles"))
}

/// Lists all shared spaces.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_spaces(client: &SageMakerClient) -> Result<Vec<Value>, ApiError> {
    info!("listing SageMaker spaces");
    let response = client.call("ListSpaces", json!({})).await?;
    Ok(take_list(response, "Spaces"))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
