//! Completion statistics over a project's task tree.
//!
//! Every function here is a pure pre-order count; they work the same on a
//! full project and on the result of [`crate::filter::filter`].
//!
//! # Not-finished statistic
//!
//! [`not_finished_stat`] is scoped to the tasks that are *not* done: its
//! `total` is the number of such tasks and its `finished` counts those among
//! them that are closed anyway (cancelled). This keeps the law
//!
//! ```text
//! not_finished_stat(p).total + done_count(p) == stat(p).total
//! ```
//!
//! for every project.

use std::collections::BTreeMap;

use crate::models::{PercentageStat, Project, ProjectStat, StatusCounts, TaskStatus};

/// Per-status counts over every task in the project.
pub fn status_counts(project: &Project) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for task in project.iter() {
        counts.record(task.status);
    }
    counts
}

/// Number of tasks whose status is done.
pub fn done_count(project: &Project) -> u32 {
    status_counts(project).done
}

/// Completion over all tasks: finished means done.
///
/// # Examples
///
/// ```rust
/// use plandoc_core::{parser::parse, stats};
///
/// let project = parse("- [x] a\n- [ ] b\n  - [x] c\n- [-] d\n", "t");
/// let stat = stats::stat(&project);
///
/// assert_eq!(stat.total, 4);
/// assert_eq!(stat.finished, 2);
/// assert_eq!(stat.percentage, 50.0);
/// ```
pub fn stat(project: &Project) -> PercentageStat {
    overall(&status_counts(project))
}

/// Completion scoped to tasks that are not done: finished means cancelled.
///
/// # Examples
///
/// ```rust
/// use plandoc_core::{parser::parse, stats};
///
/// let project = parse("- [x] a\n- [ ] b\n  - [x] c\n- [-] d\n", "t");
/// let stat = stats::not_finished_stat(&project);
///
/// assert_eq!(stat.total, 2);
/// assert_eq!(stat.finished, 1);
/// assert_eq!(stat.percentage, 50.0);
/// ```
pub fn not_finished_stat(project: &Project) -> PercentageStat {
    not_finished(&status_counts(project))
}

/// Full statistics: overall, not-finished, per status and per assignee.
pub fn project_stat(project: &Project) -> ProjectStat {
    let mut by_status = StatusCounts::default();
    let mut per_assignee: BTreeMap<String, StatusCounts> = BTreeMap::new();

    for task in project.iter() {
        by_status.record(task.status);
        if let Some(assignee) = &task.assignee {
            per_assignee
                .entry(assignee.clone())
                .or_default()
                .record(task.status);
        }
    }

    ProjectStat {
        overall: overall(&by_status),
        not_finished: not_finished(&by_status),
        by_status,
        by_assignee: per_assignee
            .into_iter()
            .map(|(assignee, counts)| (assignee, overall(&counts)))
            .collect(),
    }
}

fn overall(counts: &StatusCounts) -> PercentageStat {
    PercentageStat::new(counts.total(), counts.get(TaskStatus::Done))
}

fn not_finished(counts: &StatusCounts) -> PercentageStat {
    PercentageStat::new(
        counts.total() - counts.done,
        counts.get(TaskStatus::Cancelled),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        filter::filter,
        models::{ProjectFilter, Task},
        parser::parse,
    };

    const PLAN: &str = "\
# Stats
## [x] Phase one @ann
- [x] a @ann
- [ ] b @ben
  - [/] b1
  - [-] b2 @ben
## Phase two
- [x] c
- [~] d @ann
";

    fn count_nodes(tasks: &[Task]) -> u32 {
        tasks.iter().map(|t| 1 + count_nodes(&t.children)).sum()
    }

    #[test]
    fn test_stat_total_matches_independent_count() {
        let project = parse(PLAN, "t");
        assert_eq!(stat(&project).total, count_nodes(&project.tasks));
        assert_eq!(stat(&project).total, 8);
    }

    #[test]
    fn test_stat_counts_done_only() {
        let project = parse(PLAN, "t");
        let s = stat(&project);
        assert_eq!(s.finished, 3);
        assert_eq!(s.percentage, 37.5);
    }

    #[test]
    fn test_stat_empty_project_is_zero() {
        let project = Project::new("empty");
        assert_eq!(stat(&project), PercentageStat::new(0, 0));
        assert_eq!(stat(&project).percentage, 0.0);
        assert_eq!(not_finished_stat(&project).percentage, 0.0);
    }

    #[test]
    fn test_not_finished_stat_scoped_to_not_done() {
        let project = parse(PLAN, "t");
        let s = not_finished_stat(&project);
        assert_eq!(s.total, 5);
        assert_eq!(s.finished, 2);
        assert_eq!(s.percentage, 40.0);
    }

    #[test]
    fn test_stat_consistency_law() {
        let documents = [
            PLAN,
            "",
            "- [x] only done\n",
            "- [ ] a\n- [/] b\n- [-] c\n",
            "## x\n- [?] odd\n  - [X] y\n",
        ];
        for document in documents {
            let project = parse(document, "t");
            assert_eq!(
                not_finished_stat(&project).total + done_count(&project),
                stat(&project).total,
                "law violated for {document:?}"
            );
        }
    }

    #[test]
    fn test_stat_on_filtered_project() {
        let project = parse(PLAN, "t");
        let ann = filter(
            &project,
            &ProjectFilter {
                assignee: Some("ann".to_string()),
                ..Default::default()
            },
        );
        // Phase one, a, Phase two (context), d
        assert_eq!(stat(&ann).total, 4);
        assert_eq!(stat(&ann).finished, 2);
    }

    #[test]
    fn test_project_stat_breakdown() {
        let project = parse(PLAN, "t");
        let full = project_stat(&project);

        assert_eq!(full.overall, stat(&project));
        assert_eq!(full.not_finished_stat(), not_finished_stat(&project));
        assert_eq!(full.by_status.open, 2);
        assert_eq!(full.by_status.in_progress, 1);
        assert_eq!(full.by_status.done, 3);
        assert_eq!(full.by_status.cancelled, 2);

        assert_eq!(full.by_assignee.len(), 2);
        assert_eq!(full.by_assignee["ann"], PercentageStat::new(3, 2));
        assert_eq!(full.by_assignee["ben"], PercentageStat::new(2, 0));
    }

    #[test]
    fn test_project_stat_via_model_accessor() {
        let project = parse(PLAN, "t");
        assert_eq!(project.stat(), project_stat(&project));
    }
}
