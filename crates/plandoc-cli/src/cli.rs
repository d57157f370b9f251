//! Command handlers for the plandoc CLI
//!
//! Every command delegates to the shared handlers in `plandoc_core::handlers`
//! and only decides how the result reaches the terminal: markdown goes
//! through the [`TerminalRenderer`], the statistic is printed as raw JSON so
//! it can be piped into other tools.

use anyhow::{Context, Result};
use log::debug;
use plandoc_core::{
    handlers::{
        handle_not_finished_stat, handle_project_stat, handle_project_summary,
        handle_read_document, handle_show_project,
    },
    params::{DocumentPath, ShowProject},
    PlanService,
};

use crate::{
    args::{PathArgs, ShowArgs, StatArgs},
    renderer::TerminalRenderer,
};

/// CLI front end bound to one service and renderer
pub struct Cli {
    service: PlanService,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(service: PlanService, renderer: TerminalRenderer) -> Self {
        Self { service, renderer }
    }

    /// Show a document as a (filtered) task tree
    pub async fn show(&self, args: ShowArgs) -> Result<()> {
        let params: ShowProject = args.into();
        debug!("show: {params:?}");

        let view = handle_show_project(&self.service, &params)
            .await
            .with_context(|| format!("Failed to show '{}'", params.path))?;
        self.renderer.render(&view.to_string())
    }

    /// Print a completion statistic as JSON
    pub async fn stat(&self, args: &StatArgs) -> Result<()> {
        let params = DocumentPath::from(args);

        let stat = if args.overall {
            handle_project_stat(&self.service, &params).await
        } else {
            handle_not_finished_stat(&self.service, &params).await
        }
        .with_context(|| format!("Failed to compute statistics for '{}'", params.path))?;

        println!("{}", serde_json::to_string(&stat)?);
        Ok(())
    }

    /// Show the full statistics breakdown of a document
    pub async fn summary(&self, args: PathArgs) -> Result<()> {
        let params: DocumentPath = args.into();

        let summary = handle_project_summary(&self.service, &params)
            .await
            .with_context(|| format!("Failed to summarize '{}'", params.path))?;
        self.renderer
            .render(&format!("# Summary: {}\n\n{summary}", params.path))
    }

    /// Render any markdown document
    pub async fn read(&self, args: PathArgs) -> Result<()> {
        let params: DocumentPath = args.into();

        let markdown = handle_read_document(&self.service, &params)
            .await
            .with_context(|| format!("Failed to read '{}'", params.path))?;
        self.renderer.render(&markdown)
    }
}
