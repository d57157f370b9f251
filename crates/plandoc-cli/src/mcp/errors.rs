//! Error handling utilities for MCP server

use plandoc_core::PlanError;
use rmcp::ErrorData;

/// Convert a plan error into the MCP error matching its cause
pub fn to_mcp_error(message: &str, error: &PlanError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        PlanError::NotFound { .. } => ErrorData::resource_not_found(text, None),
        PlanError::InvalidInput { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
