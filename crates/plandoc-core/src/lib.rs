//! Core library for reading markdown plan documents.
//!
//! A plan document is an ordinary markdown file whose headings and list
//! items form a task tree. Checkbox markers such as `[ ]`, `[x]`, `[/]` and
//! `[-]` carry a task's status, and an `@name` token names its assignee. This
//! crate parses such documents into [`Project`]s, filters them, computes
//! completion statistics and formats everything as markdown.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Combine models into complete views
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use plandoc_core::{PlanServiceBuilder, params::ShowProject, handlers::handle_show_project};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Resolve documents against a root directory
//! let service = PlanServiceBuilder::new()
//!     .with_root(Some("docs"))
//!     .build()
//!     .await?;
//!
//! // Parse a document and print its progress
//! let project = service.get_project("roadmap.plan.md").await?;
//! println!("{}: {}", project.title, project.stat().overall);
//!
//! // Show only the open tasks assigned to ann
//! let view = handle_show_project(
//!     &service,
//!     &ShowProject {
//!         status: Some("open".to_string()),
//!         man: Some("ann".to_string()),
//!         ..ShowProject::new("roadmap.plan.md")
//!     },
//! )
//! .await?;
//! println!("{view}");
//! # Ok(())
//! # }
//! ```
//!
//! Parsing itself is synchronous and infallible:
//!
//! ```rust
//! let project = plandoc_core::parse("# Chores\n- [x] Dishes\n- [ ] Laundry @bo\n", "chores");
//! assert_eq!(project.title, "Chores");
//! assert_eq!(project.stat().overall.percentage, 50.0);
//! ```

pub mod display;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod params;
pub mod parser;
pub mod service;
pub mod stats;

// Re-export commonly used types
pub use display::{LocalDateTime, ProjectView};
pub use error::{PlanError, Result};
pub use handlers::{
    handle_not_finished_stat, handle_not_finished_stat_json, handle_project_stat,
    handle_project_summary, handle_read_document, handle_show_project,
};
pub use models::{
    PercentageStat, Project, ProjectFilter, ProjectStat, StatusCounts, StatusFilter, Task,
    TaskStatus,
};
pub use params::{DocumentPath, ShowProject};
pub use parser::parse;
pub use service::{MtimeCache, NoCache, PlanService, PlanServiceBuilder, ProjectCache};
