// crates/sagemaker-ops-contract/src/lib.rs
// ============================================================================
// Module: SageMaker Ops Contract Library
// Description: Canonical tool names, definitions, and input schemas.
// Purpose: Provide the single source of truth for the MCP tool surface.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The contract crate defines the canonical tool surface of the server: the
//! closed [`ToolName`] enumeration, the [`ToolDefinition`] shape served by
//! `tools/list`, and [`tool_definitions`] with one strict input schema per
//! tool. The runtime dispatches on these names; clients discover them through
//! the listing. Schemas describe the inputs but are not enforced server-side.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod tooling;
pub mod types;

#[cfg(test)]
mod tests {
    //! Test-only lint relaxations for panic-based assertions and debug output.
    #![allow(
        clippy::panic,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::use_debug,
        clippy::dbg_macro,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        reason = "Test-only output and panic-based assertions are permitted."
    )]
}

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use tooling::APP_TYPES;
pub use tooling::TRACKING_SERVER_SIZES;
pub use tooling::tool_definitions;
pub use types::ToolDefinition;
pub use types::ToolName;
