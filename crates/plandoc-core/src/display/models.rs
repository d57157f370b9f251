//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it through its terminal
//! renderer and the MCP server can return it verbatim.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    PercentageStat, Project, ProjectFilter, ProjectStat, StatusFilter, Task, TaskStatus,
};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::Is(status) => write!(f, "{status}"),
            StatusFilter::Unrecognized(raw) => write!(f, "{raw} (unrecognized)"),
        }
    }
}

impl fmt::Display for PercentageStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({}%)", self.finished, self.total, self.percentage)
    }
}

impl Task {
    /// Write this task as a markdown list item, children indented below it.
    pub(crate) fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        write!(f, "{}- {} {}", "  ".repeat(level), self.status.icon(), self.text)?;
        if let Some(assignee) = &self.assignee {
            write!(f, " *@{assignee}*")?;
        }
        writeln!(f)?;

        for child in &self.children {
            child.fmt_tree(f, level + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        if let Some(modified) = &self.modified_at {
            writeln!(f, "- Modified: {}", LocalDateTime(modified))?;
        }
        writeln!(f, "- Progress: {}", self.stat().overall)?;

        if self.tasks.is_empty() {
            writeln!(f, "\nNo tasks in this plan.")?;
            return Ok(());
        }

        writeln!(f, "\n## Tasks")?;
        writeln!(f)?;
        for task in &self.tasks {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(status) = &self.status {
            parts.push(format!("status = {status}"));
        }
        if let Some(assignee) = &self.assignee {
            parts.push(format!("man = {assignee}"));
        }
        if !self.keywords.is_empty() {
            parts.push(format!("keyword = {}", self.keywords.join(" | ")));
        }
        if self.reverse {
            parts.push("reversed".to_string());
        }

        if parts.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

impl fmt::Display for ProjectStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Progress")?;
        writeln!(f)?;
        writeln!(f, "- Overall: {}", self.overall)?;
        writeln!(f, "- Not finished (cancelled): {}", self.not_finished)?;
        writeln!(f, "- Remaining: {}", self.overall.remaining())?;
        writeln!(f)?;

        writeln!(f, "## By Status")?;
        writeln!(f)?;
        for status in TaskStatus::ALL {
            writeln!(f, "- {}: {}", status.with_icon(), self.by_status.get(status))?;
        }

        if !self.by_assignee.is_empty() {
            writeln!(f)?;
            writeln!(f, "## By Assignee")?;
            writeln!(f)?;
            for (assignee, stat) in &self.by_assignee {
                writeln!(f, "- @{assignee}: {stat}")?;
            }
        }
        Ok(())
    }
}
