//! MCP tool handlers implementation

use log::debug;
use plandoc_core::{handlers, params as core, PlanService};
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types with serde integration
///
/// Deserializes transparently into the wrapped core type and forwards its
/// JSON schema, so core parameter structs need no MCP-specific derives.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type ShowProject = McpParams<core::ShowProject>;
pub type DocumentPath = McpParams<core::DocumentPath>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers<'a> {
    service: &'a PlanService,
}

impl<'a> McpHandlers<'a> {
    pub fn new(service: &'a PlanService) -> Self {
        Self { service }
    }

    pub async fn show_project(&self, Parameters(params): Parameters<ShowProject>) -> McpResult {
        debug!("show_project: {params:?}");

        let view = handlers::handle_show_project(self.service, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to show project", &e))?;
        text_result(view.to_string())
    }

    pub async fn project_stat(&self, Parameters(params): Parameters<DocumentPath>) -> McpResult {
        debug!("project_stat: {params:?}");

        let json = handlers::handle_not_finished_stat_json(self.service, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to compute statistics", &e))?;
        text_result(json)
    }

    pub async fn project_summary(&self, Parameters(params): Parameters<DocumentPath>) -> McpResult {
        debug!("project_summary: {params:?}");

        let summary = handlers::handle_project_summary(self.service, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to summarize project", &e))?;
        text_result(summary.to_string())
    }

    pub async fn read_document(&self, Parameters(params): Parameters<DocumentPath>) -> McpResult {
        debug!("read_document: {params:?}");

        let markdown = handlers::handle_read_document(self.service, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to read document", &e))?;
        text_result(markdown)
    }
}
