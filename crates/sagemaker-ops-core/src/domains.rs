// crates/sagemaker-ops-core/src/domains.rs
// ============================================================================
// Module: Domain Operations
// Description: Forwarding helpers for Studio domains.
// Purpose: List, describe, and delete domains; mint presigned Studio URLs.
// Dependencies: serde_json, tracing
// ============================================================================

//! ## Overview
//! Forwarding helpers for Studio domains: list, describe, and delete
//! domains, and mint presigned Studio URLs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;
use tracing::info;

use crate::client::SageMakerClient;
use crate::client::take_list;
use crate::client::take_string;
use crate::error::ApiError;
use crate::mlflow::DEFAULT_PRESIGNED_URL_EXPIRATION_SECS;

// ============================================================================
// SECTION: Operations
// ============================================================================

/// Lists all Studio domains.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_domains(client: &SageMakerClient) -> Result<Vec<Value>, ApiError> {
    info!("listing SageMaker domains");
    let response = client.call("ListDomains", json!({})).await?;
    Ok(take_list(response, "Domains"))
}

/// Describes one domain.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn describe_domain(
    client: &SageMakerClient,
    domain_id: &str,
) -> Result<Value, ApiError> {
    info!(domain_id, "describing SageMaker domain");
    client.call("DescribeDomain", json!({"DomainId": domain_id})).await
}

/// Deletes a domain.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn delete_domain(client: &SageMakerClient, domain_id: &str) -> Result<(), ApiError> {
    info!(domain_id, "deleting SageMaker domain");
    client.call("DeleteDomain", json!({"DomainId": domain_id})).await?;
    info!(domain_id, "domain deleted");
    Ok(())
}

/// Creates a presigned Studio URL for a user profile within a domain.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn create_presigned_domain_url(
    client: &SageMakerClient,
    domain_id: &str,
    user_profile_name: &str,
    expiration_seconds: Option<u64>,
) -> Result<String, ApiError> {
    info!(domain_id, user_profile_name, "creating presigned domain URL");
    let response = client
        .call(
            "CreatePresignedDomainUrl",
            json!({
                "DomainId": domain_id,
                "UserProfileName": user_profile_name,
                "ExpirationSeconds":
                    expiration_seconds.unwrap_or(DEFAULT_PRESIGNED_URL_EXPIRATION_SECS),
            }),
        )
        .await?;
    Ok(take_string(response, "AuthorizedUrl"))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
