//! Filter types for querying a project's task tree.

use super::{Task, TaskStatus};

/// Status criterion of a [`ProjectFilter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusFilter {
    /// Keep tasks with exactly this status
    Is(TaskStatus),

    /// A status value that could not be recognized; matches no task
    Unrecognized(String),
}

impl StatusFilter {
    /// Parse a raw query value. Unknown values are kept as
    /// [`StatusFilter::Unrecognized`] so the filter yields an empty result
    /// instead of silently ignoring the criterion.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<TaskStatus>() {
            Ok(status) => StatusFilter::Is(status),
            Err(_) => StatusFilter::Unrecognized(raw.to_string()),
        }
    }

    /// Whether a task status satisfies this criterion.
    pub fn matches(&self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::Is(expected) => *expected == status,
            StatusFilter::Unrecognized(_) => false,
        }
    }
}

impl From<TaskStatus> for StatusFilter {
    fn from(status: TaskStatus) -> Self {
        StatusFilter::Is(status)
    }
}

/// Filter options for querying a project.
///
/// All supplied criteria combine with logical AND; the keyword list is an
/// OR-group. A default filter keeps every task in document order.
///
/// # Examples
///
/// ```rust
/// use plandoc_core::models::{ProjectFilter, Task, TaskStatus};
///
/// let filter = ProjectFilter {
///     status: Some(TaskStatus::Done.into()),
///     keywords: vec!["urgent".to_string(), "blocked".to_string()],
///     ..Default::default()
/// };
///
/// assert!(filter.matches(&Task::new("urgent fix", TaskStatus::Done, 0)));
/// assert!(!filter.matches(&Task::new("urgent fix", TaskStatus::Open, 0)));
/// assert!(!filter.matches(&Task::new("minor typo", TaskStatus::Done, 0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    /// Keep only tasks with this status
    pub status: Option<StatusFilter>,

    /// Keep only tasks assigned to this person (exact match)
    pub assignee: Option<String>,

    /// Keep only tasks whose text contains any of these substrings
    pub keywords: Vec<String>,

    /// Reverse sibling order at every level
    pub reverse: bool,
}

impl ProjectFilter {
    /// True when no criterion would drop a task.
    pub fn is_pass_through(&self) -> bool {
        self.status.is_none() && self.assignee.is_none() && self.keywords.is_empty()
    }

    /// Whether a single task satisfies every criterion, ignoring its children.
    pub fn matches(&self, task: &Task) -> bool {
        let status_ok = self
            .status
            .as_ref()
            .is_none_or(|filter| filter.matches(task.status));
        let assignee_ok = self
            .assignee
            .as_ref()
            .is_none_or(|wanted| task.assignee.as_ref() == Some(wanted));
        let keyword_ok = self.keywords.is_empty()
            || self
                .keywords
                .iter()
                .any(|keyword| task.text.contains(keyword.as_str()));

        status_ok && assignee_ok && keyword_ok
    }
}
