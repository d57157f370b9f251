//! Command-line argument definitions using clap
//!
//! Each subcommand has its own `Args` struct carrying the clap-specific
//! attributes, converted into the interface-neutral core parameter types
//! from `plandoc_core::params` with `.into()`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Handlers
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use plandoc_core::params::{DocumentPath, ShowProject};

/// Render, filter and measure markdown plan documents
///
/// A plan document is a markdown file whose headings and list items form a
/// task tree. Checkbox markers (`[ ]`, `[x]`, `[/]`, `[-]`) carry each task's
/// status and an `@name` token its assignee. plandoc shows the tree with
/// filters applied, reports completion statistics, and can serve the same
/// operations to AI assistants over MCP (Model Context Protocol).
#[derive(Parser)]
#[command(version, about, name = "plandoc")]
pub struct Args {
    /// Directory document paths are resolved against. When set, paths may
    /// not leave it. Defaults to using paths as given.
    #[arg(long, global = true, env = "PLANDOC_ROOT")]
    pub root: Option<PathBuf>,

    /// Re-read and re-parse documents on every request
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the plandoc CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show a plan document as a task tree, optionally filtered
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Print the not-finished statistic of a plan as JSON
    Stat(StatArgs),
    /// Show the full statistics breakdown of a plan
    #[command(alias = "sum")]
    Summary(PathArgs),
    /// Render any markdown document to the terminal
    #[command(alias = "r")]
    Read(PathArgs),
    /// Start the MCP server
    Serve,
}

/// Show a plan document
///
/// Filters combine with AND; `--keyword` accepts several `|`-separated
/// alternatives. Tasks that do not match themselves are kept when one of
/// their descendants matches, so the result keeps its structure.
#[derive(ClapArgs)]
pub struct ShowArgs {
    /// Path of the plan document
    pub path: String,
    /// Only keep tasks with this status
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
    /// Only keep tasks assigned to this person
    #[arg(long, short = 'm', value_name = "NAME")]
    pub man: Option<String>,
    /// Only keep tasks containing one of these `|`-separated keywords
    #[arg(long, short = 'k')]
    pub keyword: Option<String>,
    /// Reverse sibling order at every level
    #[arg(long, short = 'r')]
    pub reverse: bool,
}

impl From<ShowArgs> for ShowProject {
    fn from(val: ShowArgs) -> Self {
        ShowProject {
            path: val.path,
            status: val.status.map(|status| status.to_string()),
            man: val.man,
            keyword: val.keyword,
            reverse: val.reverse,
        }
    }
}

/// Print completion statistics as JSON
#[derive(ClapArgs)]
pub struct StatArgs {
    /// Path of the plan document
    pub path: String,
    /// Print the overall statistic instead of the not-finished one
    #[arg(long)]
    pub overall: bool,
}

impl From<&StatArgs> for DocumentPath {
    fn from(val: &StatArgs) -> Self {
        DocumentPath {
            path: val.path.clone(),
        }
    }
}

/// A command that only needs a document path
#[derive(ClapArgs)]
pub struct PathArgs {
    /// Path of the document
    pub path: String,
}

impl From<PathArgs> for DocumentPath {
    fn from(val: PathArgs) -> Self {
        DocumentPath { path: val.path }
    }
}

/// Command-line representation of task status values
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum StatusArg {
    /// Tasks not started yet
    Open,
    /// Tasks being worked on
    InProgress,
    /// Completed tasks
    Done,
    /// Abandoned tasks
    Cancelled,
}

impl std::fmt::Display for StatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusArg::Open => write!(f, "open"),
            StatusArg::InProgress => write!(f, "in_progress"),
            StatusArg::Done => write!(f, "done"),
            StatusArg::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use plandoc_core::{models::StatusFilter, ProjectFilter, TaskStatus};

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_status_arg_round_trips_through_core() {
        for (arg, status) in [
            (StatusArg::Open, TaskStatus::Open),
            (StatusArg::InProgress, TaskStatus::InProgress),
            (StatusArg::Done, TaskStatus::Done),
            (StatusArg::Cancelled, TaskStatus::Cancelled),
        ] {
            assert_eq!(arg.to_string().parse::<TaskStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_show_args_into_filter() {
        let args = Args::try_parse_from([
            "plandoc",
            "show",
            "plan.md",
            "--status",
            "in-progress",
            "-m",
            "ann",
            "-k",
            "api|docs",
            "--reverse",
        ])
        .unwrap();

        let Commands::Show(show) = args.command else {
            panic!("expected show command");
        };
        let params = ShowProject::from(show);
        let filter = ProjectFilter::from(&params);

        assert_eq!(params.path, "plan.md");
        assert_eq!(filter.status, Some(StatusFilter::Is(TaskStatus::InProgress)));
        assert_eq!(filter.assignee.as_deref(), Some("ann"));
        assert_eq!(filter.keywords, vec!["api", "docs"]);
        assert!(filter.reverse);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["plandoc", "stat", "plan.md", "--no-cache", "--root", "docs"])
                .unwrap();
        assert!(args.no_cache);
        assert_eq!(args.root, Some(PathBuf::from("docs")));
    }
}
