// crates/sagemaker-ops-core/src/session/tests.rs
// ============================================================================
// Module: Session Resolution Tests
// Description: Unit tests for region, profile, and role resolution.
// Purpose: Pin the environment-driven resolution rules.
// Dependencies: None
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items,
    reason = "test code favors brevity over production lint walls"
)]

use super::*;

#[test]
fn region_defaults_when_unset() {
    let env = Environment::from_pairs([]);
    assert_eq!(resolve_region(&env), DEFAULT_REGION);
}

#[test]
fn region_reads_environment_variable() {
    let env = Environment::from_pairs([(AWS_REGION_ENV, "eu-west-1")]);
    assert_eq!(resolve_region(&env), "eu-west-1");
}

#[test]
fn empty_region_variable_falls_back_to_default() {
    let env = Environment::from_pairs([(AWS_REGION_ENV, "")]);
    assert_eq!(resolve_region(&env), DEFAULT_REGION);
}

#[test]
fn settings_without_profile_use_default_chain() {
    let env = Environment::from_pairs([(AWS_REGION_ENV, "us-west-2")]);
    let settings = session_settings(&env, None);
    assert_eq!(settings.profile, None);
    assert_eq!(settings.region, "us-west-2");
}

#[test]
fn settings_pick_up_named_profile() {
    let env = Environment::from_pairs([(AWS_PROFILE_ENV, "research")]);
    let settings = session_settings(&env, None);
    assert_eq!(settings.profile.as_deref(), Some("research"));
    assert_eq!(settings.region, DEFAULT_REGION);
}

#[test]
fn region_override_wins_over_environment() {
    let env = Environment::from_pairs([(AWS_REGION_ENV, "us-east-2")]);
    let settings = session_settings(&env, Some("ap-southeast-1"));
    assert_eq!(settings.region, "ap-southeast-1");
}

#[test]
fn execution_role_resolves_when_set() {
    let env = Environment::from_pairs([(
        SAGEMAKER_EXECUTION_ROLE_ENV,
        "arn:aws:iam::123456789012:role/SageMakerRole",
    )]);
    let role = resolve_execution_role(&env).unwrap();
    assert_eq!(role, "arn:aws:iam::123456789012:role/SageMakerRole");
}

#[test]
fn execution_role_missing_is_a_config_error() {
    let env = Environment::from_pairs([]);
    let err = resolve_execution_role(&env).unwrap_err();
    assert_eq!(
        err.to_string(),
        "SAGEMAKER_EXECUTION_ROLE_ARN environment variable is not set"
    );
}

#[test]
fn execution_role_empty_is_a_config_error() {
    let env = Environment::from_pairs([(SAGEMAKER_EXECUTION_ROLE_ENV, "")]);
    assert!(resolve_execution_role(&env).is_err());
}
