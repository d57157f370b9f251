//! Data models for plan documents.
//!
//! This module contains the task tree produced by the [`crate::parser`], the
//! query type consumed by the [`crate::filter`] engine and the statistics
//! computed by [`crate::stats`]. Display implementations for these models live
//! in [`crate::display`] to keep data structures and presentation apart.
//!
//! # Tree Shape
//!
//! A [`Project`] owns an ordered list of top-level [`Task`]s; every task owns
//! its children exclusively. Parent status is tracked independently of the
//! children: a parent whose subtasks are all done is not completed
//! automatically.
//!
//! # Examples
//!
//! ```rust
//! use plandoc_core::models::{Project, Task, TaskStatus};
//!
//! let mut project = Project::new("Release");
//! project.tasks.push(
//!     Task::new("Ship", TaskStatus::InProgress, 0)
//!         .with_assignee("alice")
//!         .with_child(Task::new("Tag", TaskStatus::Done, 0)),
//! );
//!
//! assert_eq!(project.task_count(), 2);
//! assert_eq!(project.assignees(), vec!["alice".to_string()]);
//! assert_eq!(project.tasks[0].children[0].depth, 1);
//! ```

pub mod filters;
pub mod project;
pub mod stat;
pub mod status;
pub mod task;


pub use filters::{ProjectFilter, StatusFilter};
pub use project::Project;
pub use stat::{PercentageStat, ProjectStat, StatusCounts};
pub use status::{TaskStatus, STATUS_MARKERS};
pub use task::{Task, Tasks};
