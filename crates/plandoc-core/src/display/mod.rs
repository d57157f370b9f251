//! Display wrapper types for formatting different contexts.
//!
//! Domain models implement [`std::fmt::Display`] directly; the wrappers here
//! combine several of them into one markdown document for a specific view.
//!
//! - [`ProjectView`]: a (possibly filtered) project together with statistics
//!   and assignees of the full, unfiltered project
//! - [`LocalDateTime`]: system-timezone timestamp formatting
//!
//! # Examples
//!
//! ```rust
//! use plandoc_core::{display::ProjectView, models::ProjectFilter, parser::parse};
//!
//! let project = parse("# Demo\n- [x] a @ann\n- [ ] b\n", "demo");
//! let view = ProjectView::new(&project, project.clone(), ProjectFilter::default());
//!
//! let output = view.to_string();
//! assert!(output.contains("# Demo"));
//! assert!(output.contains("- Progress: 1/2 (50%)"));
//! assert!(output.contains("- Assignees: @ann"));
//! assert!(output.contains("- ✓ a *@ann*"));
//! ```

mod datetime;
mod models;

use std::fmt;

pub use datetime::LocalDateTime;

use crate::models::{Project, ProjectFilter, ProjectStat};

/// A project view as shown to a reader: the filtered tree plus context taken
/// from the full project.
#[derive(Debug, Clone)]
pub struct ProjectView {
    /// The project after filtering
    pub project: Project,
    /// Statistics of the unfiltered project
    pub full_stat: ProjectStat,
    /// Every assignee of the unfiltered project
    pub assignees: Vec<String>,
    /// Filter that produced `project`
    pub filter: ProjectFilter,
}

impl ProjectView {
    /// Build a view from the full project and its filtered counterpart.
    pub fn new(full: &Project, project: Project, filter: ProjectFilter) -> Self {
        Self {
            project,
            full_stat: full.stat(),
            assignees: full.assignees(),
            filter,
        }
    }
}

impl fmt::Display for ProjectView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.project.title)?;
        writeln!(f)?;

        if let Some(modified) = &self.project.modified_at {
            writeln!(f, "- Modified: {}", LocalDateTime(modified))?;
        }
        writeln!(f, "- Progress: {}", self.full_stat.overall)?;
        if !self.assignees.is_empty() {
            let names: Vec<String> = self.assignees.iter().map(|a| format!("@{a}")).collect();
            writeln!(f, "- Assignees: {}", names.join(", "))?;
        }
        if !self.filter.is_pass_through() || self.filter.reverse {
            writeln!(f, "- Filter: {}", self.filter)?;
        }

        if self.project.tasks.is_empty() {
            let message = if self.filter.is_pass_through() {
                "No tasks in this plan."
            } else {
                "No tasks match the filter."
            };
            writeln!(f, "\n{message}")?;
            return Ok(());
        }

        writeln!(f, "\n## Tasks")?;
        writeln!(f)?;
        for task in &self.project.tasks {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}
