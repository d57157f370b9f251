//! Task status enumeration and the checkbox marker table.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has not been started
    #[default]
    Open,

    /// Task is being worked on
    InProgress,

    /// Task has been completed
    Done,

    /// Task was dropped without being completed
    Cancelled,
}

/// Checkbox markers recognized at the start of a task line.
///
/// Anything in brackets that is not listed here is left in the task text and
/// the task defaults to [`TaskStatus::Open`].
pub const STATUS_MARKERS: &[(&str, TaskStatus)] = &[
    ("[ ]", TaskStatus::Open),
    ("[x]", TaskStatus::Done),
    ("[X]", TaskStatus::Done),
    ("[/]", TaskStatus::InProgress),
    ("[>]", TaskStatus::InProgress),
    ("[-]", TaskStatus::Cancelled),
    ("[~]", TaskStatus::Cancelled),
];

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" | "todo" => Ok(TaskStatus::Open),
            "inprogress" | "in_progress" | "in-progress" | "doing" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            "cancelled" | "canceled" => Ok(TaskStatus::Cancelled),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

impl TaskStatus {
    /// All statuses in display order.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Open,
        TaskStatus::InProgress,
        TaskStatus::Done,
        TaskStatus::Cancelled,
    ];

    /// Stable string representation used in queries and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "open",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
            TaskStatus::Cancelled => "cancelled",
        }
    }

    /// Look up the status for a checkbox marker such as `[x]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plandoc_core::models::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::from_marker("[x]"), Some(TaskStatus::Done));
    /// assert_eq!(TaskStatus::from_marker("[?]"), None);
    /// ```
    pub fn from_marker(marker: &str) -> Option<TaskStatus> {
        STATUS_MARKERS
            .iter()
            .find(|(m, _)| *m == marker)
            .map(|(_, status)| *status)
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `✓ Done` - Checkmark for completed tasks
    /// - `➤ In Progress` - Arrow for active tasks
    /// - `○ Open` - Circle for pending tasks
    /// - `✗ Cancelled` - Cross for dropped tasks
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Done => "✓ Done",
            TaskStatus::InProgress => "➤ In Progress",
            TaskStatus::Open => "○ Open",
            TaskStatus::Cancelled => "✗ Cancelled",
        }
    }

    /// Just the icon, used when rendering task trees.
    pub fn icon(&self) -> &'static str {
        match self {
            TaskStatus::Done => "✓",
            TaskStatus::InProgress => "➤",
            TaskStatus::Open => "○",
            TaskStatus::Cancelled => "✗",
        }
    }
}
