//! Completion statistics types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// Aggregate completion snapshot.
///
/// The serialized form (`total`, `finished`, `percentage`) is consumed by
/// external tools; field names and numeric types must stay stable.
///
/// # Examples
///
/// ```rust
/// use plandoc_core::models::PercentageStat;
///
/// let stat = PercentageStat::new(3, 1);
/// assert_eq!(stat.percentage, 33.33);
/// assert_eq!(PercentageStat::new(0, 0).percentage, 0.0);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PercentageStat {
    /// Number of tasks considered
    pub total: u32,
    /// Number of those tasks counted as finished
    pub finished: u32,
    /// `finished / total * 100`, rounded to two decimals; 0 for no tasks
    pub percentage: f64,
}

impl PercentageStat {
    /// Build a stat from raw counts, computing the percentage.
    pub fn new(total: u32, finished: u32) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            (f64::from(finished) * 10_000.0 / f64::from(total)).round() / 100.0
        };
        Self {
            total,
            finished,
            percentage,
        }
    }

    /// Number of tasks not counted as finished.
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.finished)
    }
}

/// Task counts per status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub open: u32,
    pub in_progress: u32,
    pub done: u32,
    pub cancelled: u32,
}

impl StatusCounts {
    /// Count one task with the given status.
    pub fn record(&mut self, status: TaskStatus) {
        match status {
            TaskStatus::Open => self.open += 1,
            TaskStatus::InProgress => self.in_progress += 1,
            TaskStatus::Done => self.done += 1,
            TaskStatus::Cancelled => self.cancelled += 1,
        }
    }

    /// Count for a single status.
    pub fn get(&self, status: TaskStatus) -> u32 {
        match status {
            TaskStatus::Open => self.open,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Done => self.done,
            TaskStatus::Cancelled => self.cancelled,
        }
    }

    /// Sum over all statuses.
    pub fn total(&self) -> u32 {
        self.open + self.in_progress + self.done + self.cancelled
    }
}

/// Full statistics for a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProjectStat {
    /// Every task; finished means done
    pub overall: PercentageStat,
    /// Tasks that are not done; finished means cancelled
    pub not_finished: PercentageStat,
    /// Task counts per status
    pub by_status: StatusCounts,
    /// Overall stat restricted to each assignee's tasks
    pub by_assignee: BTreeMap<String, PercentageStat>,
}

impl ProjectStat {
    /// The not-finished variant served as the machine-readable summary.
    pub fn not_finished_stat(&self) -> PercentageStat {
        self.not_finished
    }
}
