// crates/sagemaker-ops-core/src/session.rs
// ============================================================================
// Module: Session Resolution
// Description: Region, profile, and execution-role resolution from the environment.
// Purpose: Produce AWS shared configuration without hardcoding secrets.
// Dependencies: aws-config
// ============================================================================

//! ## Overview
//! Resolution is split into pure functions over an [`Environment`] snapshot
//! and one async loader that turns the resolved [`SessionSettings`] into an
//! AWS [`SdkConfig`]. Nothing here is cached: every resolution re-reads the
//! snapshot it is handed, and callers capture a fresh snapshot per call by
//! design. Credential material is never logged or embedded in errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_config::SdkConfig;
use tracing::debug;

use crate::error::ConfigError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable selecting the AWS region.
pub const AWS_REGION_ENV: &str = "AWS_REGION";
/// Environment variable naming an AWS credential profile.
pub const AWS_PROFILE_ENV: &str = "AWS_PROFILE";
/// Environment variable naming the SageMaker execution role ARN.
pub const SAGEMAKER_EXECUTION_ROLE_ENV: &str = "SAGEMAKER_EXECUTION_ROLE_ARN";
/// Region used when no region environment variable is set.
pub const DEFAULT_REGION: &str = "us-east-1";

// ============================================================================
// SECTION: Environment Snapshot
// ============================================================================

/// Immutable snapshot of process environment variables.
///
/// Resolution functions take a snapshot instead of reading the process
/// environment directly so that their behavior is pure and testable.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Captured variable name/value pairs.
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Captures the current process environment.
    #[must_use]
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Builds a snapshot from explicit pairs.
    #[must_use]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            vars: pairs
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// Returns the value of a variable when set and non-empty.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str).filter(|value| !value.is_empty())
    }
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Inputs used to construct an AWS session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// Named credential profile, when one is configured.
    pub profile: Option<String>,
    /// Region the session is bound to.
    pub region: String,
}

/// Resolves the AWS region from the environment, defaulting to
/// [`DEFAULT_REGION`].
#[must_use]
pub fn resolve_region(env: &Environment) -> String {
    env.get(AWS_REGION_ENV).map_or_else(|| DEFAULT_REGION.to_string(), str::to_string)
}

/// Resolves session settings from the environment and an optional region
/// override.
#[must_use]
pub fn session_settings(env: &Environment, region_override: Option<&str>) -> SessionSettings {
    SessionSettings {
        profile: env.get(AWS_PROFILE_ENV).map(str::to_string),
        region: region_override.map_or_else(|| resolve_region(env), str::to_string),
    }
}

/// Loads AWS shared configuration for the resolved settings.
///
/// When a profile is named the session binds to it; otherwise the ambient
/// default credential discovery chain applies.
pub async fn resolve_session(env: &Environment, region_override: Option<&str>) -> SdkConfig {
    let settings = session_settings(env, region_override);
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(settings.region));
    if let Some(profile) = settings.profile {
        debug!(profile, "using named AWS profile");
        loader = loader.profile_name(profile);
    } else {
        debug!("using default AWS credential chain");
    }
    loader.load().await
}

/// Resolves the SageMaker execution role ARN from the environment.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnv`] when the variable is unset or empty.
pub fn resolve_execution_role(env: &Environment) -> Result<String, ConfigError> {
    env.get(SAGEMAKER_EXECUTION_ROLE_ENV).map(str::to_string).ok_or(ConfigError::MissingEnv {
        name: SAGEMAKER_EXECUTION_ROLE_ENV,
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
