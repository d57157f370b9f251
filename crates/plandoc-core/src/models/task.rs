//! Task model definition and tree traversal.

use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// A node in a plan's task tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Task text with list marker, status marker and assignee removed
    pub text: String,

    /// Current status of the task
    pub status: TaskStatus,

    /// Responsible party, parsed from the first `@name` token
    #[serde(rename = "man", skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    /// Nesting depth (0 for top-level tasks)
    pub depth: usize,

    /// 1-based line in the source document that opened the task
    pub line: usize,

    /// Subtasks in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Task>,
}

impl Task {
    /// Create a leaf task at the given depth.
    pub fn new(text: impl Into<String>, status: TaskStatus, depth: usize) -> Self {
        Self {
            text: text.into(),
            status,
            assignee: None,
            depth,
            line: 0,
            children: Vec::new(),
        }
    }

    /// Set the assignee.
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Append a child, fixing up its depth (and its subtree's) to sit below
    /// this task.
    pub fn with_child(mut self, mut child: Task) -> Self {
        child.set_depth(self.depth + 1);
        self.children.push(child);
        self
    }

    fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
        for child in &mut self.children {
            child.set_depth(depth + 1);
        }
    }

    /// Number of tasks in this subtree, including this one.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Task::subtree_len).sum::<usize>()
    }
}

/// Pre-order iterator over a task forest.
pub struct Tasks<'a> {
    stack: Vec<&'a Task>,
}

impl<'a> Tasks<'a> {
    pub(crate) fn over(roots: &'a [Task]) -> Self {
        Self {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for Tasks<'a> {
    type Item = &'a Task;

    fn next(&mut self) -> Option<Self::Item> {
        let task = self.stack.pop()?;
        self.stack.extend(task.children.iter().rev());
        Some(task)
    }
}
