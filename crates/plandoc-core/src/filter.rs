//! Filter engine for project task trees.
//!
//! Filtering rebuilds the tree instead of removing nodes in place. Each node
//! is evaluated bottom-up: it is kept when it matches the filter itself or
//! when at least one of its descendants is kept, in which case it stays in
//! the result as context for that descendant. The input project is never
//! modified.

use crate::models::{Project, ProjectFilter, Task};

/// Apply a filter to a project, returning a new, independent project.
///
/// # Examples
///
/// ```rust
/// use plandoc_core::{
///     filter::filter,
///     models::{Project, ProjectFilter, Task, TaskStatus},
/// };
///
/// let mut project = Project::new("Demo");
/// project.tasks = vec![
///     Task::new("A", TaskStatus::Open, 0).with_child(Task::new("B", TaskStatus::Done, 0)),
///     Task::new("C", TaskStatus::Open, 0),
/// ];
///
/// let done = filter(
///     &project,
///     &ProjectFilter {
///         status: Some(TaskStatus::Done.into()),
///         ..Default::default()
///     },
/// );
///
/// assert_eq!(done.tasks.len(), 1);
/// assert_eq!(done.tasks[0].text, "A");
/// assert_eq!(done.tasks[0].children[0].text, "B");
/// ```
pub fn filter(project: &Project, filter: &ProjectFilter) -> Project {
    let tasks = if filter.is_pass_through() {
        project.tasks.clone()
    } else {
        project
            .tasks
            .iter()
            .filter_map(|task| prune(task, filter))
            .collect()
    };

    let mut result = Project {
        title: project.title.clone(),
        modified_at: project.modified_at,
        tasks,
    };

    if filter.reverse {
        reverse_siblings(&mut result.tasks);
    }
    result
}

/// Rebuild `task` keeping only matching nodes and their ancestors.
fn prune(task: &Task, filter: &ProjectFilter) -> Option<Task> {
    let children: Vec<Task> = task
        .children
        .iter()
        .filter_map(|child| prune(child, filter))
        .collect();

    if !children.is_empty() || filter.matches(task) {
        Some(Task {
            text: task.text.clone(),
            status: task.status,
            assignee: task.assignee.clone(),
            depth: task.depth,
            line: task.line,
            children,
        })
    } else {
        None
    }
}

/// Reverse sibling order at every level of a task forest.
pub fn reverse_siblings(tasks: &mut [Task]) {
    tasks.reverse();
    for task in tasks {
        reverse_siblings(&mut task.children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StatusFilter, TaskStatus};

    /// root-level tree:
    /// - A (open)
    ///   - B (done, @bob)
    ///   - D (open)
    /// - C (open)
    ///   - E (in progress, @bob)
    fn create_test_project() -> Project {
        let mut project = Project::new("Filter Test");
        project.tasks = vec![
            Task::new("A", TaskStatus::Open, 0)
                .with_child(Task::new("B", TaskStatus::Done, 0).with_assignee("bob"))
                .with_child(Task::new("D", TaskStatus::Open, 0)),
            Task::new("C", TaskStatus::Open, 0)
                .with_child(Task::new("E", TaskStatus::InProgress, 0).with_assignee("bob")),
        ];
        project
    }

    fn texts(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_filter_status_preserves_ancestors() {
        let project = create_test_project();
        let result = filter(
            &project,
            &ProjectFilter {
                status: Some(TaskStatus::Done.into()),
                ..Default::default()
            },
        );

        assert_eq!(texts(&result.tasks), vec!["A"]);
        assert_eq!(texts(&result.tasks[0].children), vec!["B"]);
        assert_eq!(result.tasks[0].status, TaskStatus::Open);
    }

    #[test]
    fn test_filter_matching_parent_drops_non_matching_children() {
        let project = create_test_project();
        let result = filter(
            &project,
            &ProjectFilter {
                keywords: vec!["C".to_string()],
                ..Default::default()
            },
        );

        assert_eq!(texts(&result.tasks), vec!["C"]);
        assert!(result.tasks[0].children.is_empty());
    }

    #[test]
    fn test_filter_keywords_or_semantics() {
        let mut project = Project::new("Keywords");
        project.tasks = vec![
            Task::new("urgent fix", TaskStatus::Open, 0),
            Task::new("blocked release", TaskStatus::Open, 0),
            Task::new("minor typo", TaskStatus::Open, 0),
        ];

        let result = filter(
            &project,
            &ProjectFilter {
                keywords: vec!["urgent".to_string(), "blocked".to_string()],
                ..Default::default()
            },
        );

        assert_eq!(texts(&result.tasks), vec!["urgent fix", "blocked release"]);
    }

    #[test]
    fn test_filter_assignee_exact_match() {
        let project = create_test_project();
        let result = filter(
            &project,
            &ProjectFilter {
                assignee: Some("bob".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(texts(&result.tasks), vec!["A", "C"]);
        assert_eq!(texts(&result.tasks[0].children), vec!["B"]);
        assert_eq!(texts(&result.tasks[1].children), vec!["E"]);

        let none = filter(
            &project,
            &ProjectFilter {
                assignee: Some("Bob".to_string()),
                ..Default::default()
            },
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_criteria_combine_with_and() {
        let project = create_test_project();
        let result = filter(
            &project,
            &ProjectFilter {
                status: Some(TaskStatus::InProgress.into()),
                assignee: Some("bob".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(texts(&result.tasks), vec!["C"]);
        assert_eq!(texts(&result.tasks[0].children), vec!["E"]);
    }

    #[test]
    fn test_filter_unrecognized_status_yields_empty_project() {
        let project = create_test_project();
        let result = filter(
            &project,
            &ProjectFilter {
                status: Some(StatusFilter::Unrecognized("someday".to_string())),
                ..Default::default()
            },
        );
        assert!(result.is_empty());
        assert_eq!(result.title, "Filter Test");
    }

    #[test]
    fn test_filter_pass_through_is_equal() {
        let project = create_test_project();
        let result = filter(&project, &ProjectFilter::default());
        assert_eq!(result, project);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let project = create_test_project();
        let snapshot = project.clone();
        let _ = filter(
            &project,
            &ProjectFilter {
                status: Some(TaskStatus::Done.into()),
                reverse: true,
                ..Default::default()
            },
        );
        assert_eq!(project, snapshot);
    }

    #[test]
    fn test_filter_reverse_every_level() {
        let project = create_test_project();
        let result = filter(
            &project,
            &ProjectFilter {
                reverse: true,
                ..Default::default()
            },
        );
        assert_eq!(texts(&result.tasks), vec!["C", "A"]);
        assert_eq!(texts(&result.tasks[1].children), vec!["D", "B"]);
    }

    #[test]
    fn test_reverse_twice_restores_order() {
        let project = create_test_project();
        let mut tasks = project.tasks.clone();
        reverse_siblings(&mut tasks);
        reverse_siblings(&mut tasks);
        assert_eq!(tasks, project.tasks);
    }

    #[test]
    fn test_filter_keeps_depth_and_line() {
        let project = crate::parser::parse("- [ ] a\n  - [x] b\n", "t");
        let result = filter(
            &project,
            &ProjectFilter {
                status: Some(TaskStatus::Done.into()),
                ..Default::default()
            },
        );
        let b = &result.tasks[0].children[0];
        assert_eq!(b.depth, 1);
        assert_eq!(b.line, 2);
    }
}
