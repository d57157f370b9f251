//! plandoc CLI Application
//!
//! Command-line interface and MCP server for markdown plan documents.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, PlandocMcpServer};
use plandoc_core::PlanServiceBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        root,
        no_cache,
        no_color,
        command,
    } = Args::parse();

    let mut builder = PlanServiceBuilder::new().with_root(root.as_deref());
    if no_cache {
        builder = builder.without_cache();
    }
    let service = builder
        .build()
        .await
        .context("Failed to initialize plan service")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("plandoc started");

    match command {
        Show(args) => Cli::new(service, renderer).show(args).await,
        Stat(args) => Cli::new(service, renderer).stat(&args).await,
        Summary(args) => Cli::new(service, renderer).summary(args).await,
        Read(args) => Cli::new(service, renderer).read(args).await,
        Serve => {
            info!("Starting plandoc MCP server");
            run_stdio_server(PlandocMcpServer::new(service))
                .await
                .context("MCP server failed")
        }
    }
}
