//! Project model definition and related functionality.

use std::collections::BTreeSet;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{task::Tasks, ProjectStat, Task};

/// Root container for one parsed plan document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Title from the document's first level-1 heading, or the file name
    pub title: String,

    /// Modification time of the source file, when parsed from disk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<Timestamp>,

    /// Top-level tasks in document order
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    /// Create an empty project with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            modified_at: None,
            tasks: Vec::new(),
        }
    }

    /// Pre-order iterator over every task in the tree.
    pub fn iter(&self) -> Tasks<'_> {
        Tasks::over(&self.tasks)
    }

    /// Total number of tasks at every depth.
    pub fn task_count(&self) -> usize {
        self.tasks.iter().map(Task::subtree_len).sum()
    }

    /// Whether the project has no tasks at all.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Sorted, de-duplicated list of every assignee in the tree.
    pub fn assignees(&self) -> Vec<String> {
        self.iter()
            .filter_map(|task| task.assignee.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Aggregate statistics over the whole tree.
    pub fn stat(&self) -> ProjectStat {
        crate::stats::project_stat(self)
    }
}
