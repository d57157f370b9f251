//! MCP server implementation for plandoc
//!
//! Exposes the plan document operations as Model Context Protocol tools so
//! AI assistants can read plans, filter them and check progress.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use plandoc_core::PlanService;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{DocumentPath, McpResult, ShowProject};

const INSTRUCTIONS: &str = r#"plandoc reads markdown plan documents: headings and list items form a task tree, checkbox markers carry each task's status and an `@name` token its assignee.

## Status markers
- `[ ]` open, `[/]` or `[>]` in progress, `[x]` done, `[-]` or `[~]` cancelled
- A task written as `~~text~~` without a checkbox is cancelled

## Workflow
1. Use `show_project` to see a plan's task tree with its overall progress and assignees
2. Narrow it down with `status`, `man` (assignee) and `keyword` (`|`-separated alternatives); ancestors of matching tasks are kept for context
3. Use `project_stat` for the machine-readable not-finished statistic, or `project_summary` for a breakdown by status and assignee
4. Use `read_document` to get the raw markdown of any document

Paths are relative to the server's document root."#;

/// MCP server for plandoc
#[derive(Clone)]
pub struct PlandocMcpServer {
    service: Arc<PlanService>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PlandocMcpServer {
    /// Create a new plandoc MCP server
    pub fn new(service: PlanService) -> Self {
        Self {
            service: Arc::new(service),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "show_project",
        description = "Show a plan document as a markdown task tree. Optional filters: status (open, in_progress, done, cancelled), man (assignee name without @), keyword (one or more '|'-separated substrings, any may match), reverse (reverse sibling order). Filters combine with AND; ancestors of matching tasks are kept. The header always shows progress and assignees of the whole plan."
    )]
    async fn show_project(&self, params: Parameters<ShowProject>) -> McpResult {
        handlers::McpHandlers::new(&self.service)
            .show_project(params)
            .await
    }

    #[tool(
        name = "project_stat",
        description = "Return the not-finished statistic of a plan as JSON: {\"total\", \"finished\", \"percentage\"}. total counts tasks that are not done, finished counts the cancelled ones among them, percentage is finished/total*100 rounded to two decimals."
    )]
    async fn project_stat(&self, params: Parameters<DocumentPath>) -> McpResult {
        handlers::McpHandlers::new(&self.service)
            .project_stat(params)
            .await
    }

    #[tool(
        name = "project_summary",
        description = "Return a markdown breakdown of a plan's progress: overall completion, the not-finished statistic, task counts per status and completion per assignee."
    )]
    async fn project_summary(&self, params: Parameters<DocumentPath>) -> McpResult {
        handlers::McpHandlers::new(&self.service)
            .project_summary(params)
            .await
    }

    #[tool(
        name = "read_document",
        description = "Return the raw markdown text of any document under the document root."
    )]
    async fn read_document(&self, params: Parameters<DocumentPath>) -> McpResult {
        handlers::McpHandlers::new(&self.service)
            .read_document(params)
            .await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for PlandocMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: PlandocMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting plandoc MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(reason) => info!("MCP server stopped: {reason:?}"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use plandoc_core::PlanServiceBuilder;

    use super::*;

    #[tokio::test]
    async fn test_server_registers_all_tools() {
        let service = PlanServiceBuilder::new().build().await.unwrap();
        let server = PlandocMcpServer::new(service);

        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec!["project_stat", "project_summary", "read_document", "show_project"]
        );

        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("show_project"));
    }
}
