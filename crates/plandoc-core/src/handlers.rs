//! Core handler functions shared by the CLI and the MCP server.
//!
//! Each handler runs one complete request workflow against a
//! [`PlanService`] and returns structured data. Front ends decide how to
//! present it: the CLI renders the markdown `Display` output in the terminal,
//! the MCP server returns it as tool text, and the not-finished statistic is
//! serialized to JSON.
//!
//! ```text
//! Interface → Handler → PlanService → Parser / Filter / Stats
//! ```
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! # use plandoc_core::{handlers::handle_show_project, params::ShowProject, PlanServiceBuilder};
//! # async {
//! let service = PlanServiceBuilder::new().build().await?;
//! let params = ShowProject {
//!     man: Some("ann".to_string()),
//!     ..ShowProject::new("release.plan.md")
//! };
//! let view = handle_show_project(&service, &params).await?;
//! println!("{view}");
//! # Result::<(), plandoc_core::PlanError>::Ok(())
//! # };
//! ```

use std::path::Path;

use log::{debug, warn};

use crate::{
    display::ProjectView,
    filter,
    models::{PercentageStat, ProjectFilter, ProjectStat, StatusFilter},
    params::{DocumentPath, ShowProject},
    PlanService, Result,
};

/// Handle showing a plan document, optionally filtered.
///
/// The document is loaded once; the filter is applied to the loaded tree
/// while header information (progress, assignees) comes from the full
/// document so readers can see what the filter hid.
///
/// An unrecognized status value does not fail the request. It matches no
/// task, so the view reports that nothing matched.
///
/// # Examples
///
/// ```rust,no_run
/// # use plandoc_core::{handlers::handle_show_project, params::ShowProject, PlanServiceBuilder};
/// # async {
/// let service = PlanServiceBuilder::new().build().await?;
/// let params = ShowProject {
///     status: Some("open".to_string()),
///     reverse: true,
///     ..ShowProject::new("release.plan.md")
/// };
/// let view = handle_show_project(&service, &params).await?;
/// # Result::<(), plandoc_core::PlanError>::Ok(())
/// # };
/// ```
pub async fn handle_show_project(
    service: &PlanService,
    params: &ShowProject,
) -> Result<ProjectView> {
    let project_filter = ProjectFilter::from(params);
    if let Some(StatusFilter::Unrecognized(raw)) = &project_filter.status {
        warn!("Unrecognized status filter '{raw}'; no task will match");
    }
    debug!("Showing {} with filter: {}", params.path, project_filter);

    let full = service.load(Path::new(&params.path)).await?;
    let filtered = filter::filter(&full, &project_filter);
    Ok(ProjectView::new(&full, filtered, project_filter))
}

/// Handle the overall completion statistic of a document.
pub async fn handle_project_stat(
    service: &PlanService,
    params: &DocumentPath,
) -> Result<PercentageStat> {
    service.get_project_stat(&params.path).await
}

/// Handle the not-finished statistic of a document.
///
/// Counts the tasks that are not done and how many of them were cancelled;
/// see [`crate::stats`] for the exact definition.
pub async fn handle_not_finished_stat(
    service: &PlanService,
    params: &DocumentPath,
) -> Result<PercentageStat> {
    service.get_not_finished_stat(&params.path).await
}

/// Handle the not-finished statistic, serialized as the stable JSON contract
/// `{"total":..,"finished":..,"percentage":..}`.
pub async fn handle_not_finished_stat_json(
    service: &PlanService,
    params: &DocumentPath,
) -> Result<String> {
    let stat = handle_not_finished_stat(service, params).await?;
    Ok(serde_json::to_string(&stat)?)
}

/// Handle the full statistics breakdown of a document.
pub async fn handle_project_summary(
    service: &PlanService,
    params: &DocumentPath,
) -> Result<ProjectStat> {
    service.get_project_summary(&params.path).await
}

/// Handle reading the raw markdown of a document.
pub async fn handle_read_document(service: &PlanService, params: &DocumentPath) -> Result<String> {
    service.read_document(&params.path).await
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::PlanServiceBuilder;

    const PLAN: &str = "\
# Launch
## Prep
- [x] Budget @ann
- [ ] Venue @bob
- [-] Catering @ann
";

    async fn setup() -> (TempDir, PlanService) {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("launch.md"), PLAN).unwrap();
        let service = PlanServiceBuilder::new()
            .with_root(Some(temp_dir.path()))
            .build()
            .await
            .unwrap();
        (temp_dir, service)
    }

    #[tokio::test]
    async fn test_handle_show_project_filters_by_assignee() {
        let (_temp_dir, service) = setup().await;
        let params = ShowProject {
            man: Some("bob".to_string()),
            ..ShowProject::new("launch.md")
        };

        let view = handle_show_project(&service, &params).await.unwrap();
        assert_eq!(view.project.task_count(), 2);
        assert_eq!(view.project.tasks[0].text, "Prep");
        assert_eq!(view.project.tasks[0].children[0].text, "Venue");
        assert_eq!(view.full_stat.overall, PercentageStat::new(4, 1));
        assert_eq!(view.assignees, vec!["ann", "bob"]);
    }

    #[tokio::test]
    async fn test_handle_show_project_unrecognized_status_is_empty() {
        let (_temp_dir, service) = setup().await;
        let params = ShowProject {
            status: Some("blocked".to_string()),
            ..ShowProject::new("launch.md")
        };

        let view = handle_show_project(&service, &params).await.unwrap();
        assert!(view.project.tasks.is_empty());
        assert!(view.to_string().contains("No tasks match the filter."));
    }

    #[tokio::test]
    async fn test_handle_show_project_reverse() {
        let (_temp_dir, service) = setup().await;
        let params = ShowProject {
            reverse: true,
            ..ShowProject::new("launch.md")
        };

        let view = handle_show_project(&service, &params).await.unwrap();
        let texts: Vec<&str> = view.project.tasks[0]
            .children
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(texts, vec!["Catering", "Venue", "Budget"]);
    }

    #[tokio::test]
    async fn test_handle_not_finished_stat_json() {
        let (_temp_dir, service) = setup().await;
        let params = DocumentPath {
            path: "launch.md".to_string(),
        };

        let json = handle_not_finished_stat_json(&service, &params).await.unwrap();
        assert_eq!(json, r#"{"total":3,"finished":1,"percentage":33.33}"#);

        let overall = handle_project_stat(&service, &params).await.unwrap();
        assert_eq!(overall, PercentageStat::new(4, 1));
    }

    #[tokio::test]
    async fn test_handle_project_summary() {
        let (_temp_dir, service) = setup().await;
        let params = DocumentPath {
            path: "launch.md".to_string(),
        };
        let summary = handle_project_summary(&service, &params).await.unwrap();
        assert_eq!(summary.not_finished, PercentageStat::new(3, 1));
        assert_eq!(summary.by_assignee["ann"], PercentageStat::new(2, 1));
    }

    #[tokio::test]
    async fn test_handle_read_document_missing() {
        let (_temp_dir, service) = setup().await;
        let params = DocumentPath {
            path: "nope.md".to_string(),
        };
        let err = handle_read_document(&service, &params).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
