//! Parameter structures for plandoc operations
//!
//! Shared request types used by every front end. The CLI wraps them in clap
//! `Args` structs and converts with `.into()`; the MCP server deserializes
//! them through a transparent wrapper. JSON schema derives are only compiled
//! with the `schema` feature.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Query values arrive as free text. Converting [`ShowProject`] into a
//! [`ProjectFilter`] is where they get their meaning: blank values are
//! treated as absent, the keyword string is split on `|`, and the status is
//! parsed case-insensitively.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{ProjectFilter, StatusFilter};

/// Parameters naming a single plan document.
///
/// Used by the statistics, summary and raw read operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DocumentPath {
    /// Path of the plan document, relative to the document root
    pub path: String,
}

/// Parameters for showing a plan document as a task tree.
///
/// Every filter is optional; with none set the whole tree is returned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowProject {
    /// Path of the plan document, relative to the document root
    pub path: String,
    /// Only keep tasks with this status (open, in_progress, done, cancelled)
    #[serde(default)]
    pub status: Option<String>,
    /// Only keep tasks assigned to this person (without the leading @)
    #[serde(default)]
    pub man: Option<String>,
    /// Only keep tasks containing one of these `|`-separated keywords
    #[serde(default)]
    pub keyword: Option<String>,
    /// Reverse the order of sibling tasks at every level
    #[serde(default)]
    pub reverse: bool,
}

impl ShowProject {
    /// Parameters that show the whole document at `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }
}

impl From<&ShowProject> for ProjectFilter {
    fn from(params: &ShowProject) -> Self {
        ProjectFilter {
            status: non_blank(params.status.as_deref()).map(StatusFilter::parse),
            assignee: non_blank(params.man.as_deref()).map(|man| {
                man.strip_prefix('@').unwrap_or(man).to_string()
            }),
            keywords: params
                .keyword
                .as_deref()
                .map(split_keywords)
                .unwrap_or_default(),
            reverse: params.reverse,
        }
    }
}

/// Split a `|`-separated keyword list, trimming each piece and dropping
/// empty ones.
///
/// ```rust
/// use plandoc_core::params::split_keywords;
///
/// assert_eq!(split_keywords(" api | | docs"), vec!["api", "docs"]);
/// assert!(split_keywords("  ").is_empty());
/// ```
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(String::from)
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    #[test]
    fn test_empty_params_are_pass_through() {
        let filter = ProjectFilter::from(&ShowProject::new("a.md"));
        assert!(filter.is_pass_through());
        assert!(!filter.reverse);
    }

    #[test]
    fn test_blank_values_are_absent() {
        let params = ShowProject {
            path: "a.md".to_string(),
            status: Some("  ".to_string()),
            man: Some(String::new()),
            keyword: Some(" | ".to_string()),
            reverse: false,
        };
        assert!(ProjectFilter::from(&params).is_pass_through());
    }

    #[test]
    fn test_full_conversion() {
        let params = ShowProject {
            path: "a.md".to_string(),
            status: Some("Done".to_string()),
            man: Some("@ann".to_string()),
            keyword: Some("api|docs ".to_string()),
            reverse: true,
        };
        let filter = ProjectFilter::from(&params);

        assert_eq!(filter.status, Some(StatusFilter::Is(TaskStatus::Done)));
        assert_eq!(filter.assignee.as_deref(), Some("ann"));
        assert_eq!(filter.keywords, vec!["api", "docs"]);
        assert!(filter.reverse);
    }

    #[test]
    fn test_unknown_status_is_kept_as_unrecognized() {
        let params = ShowProject {
            status: Some("blocked".to_string()),
            ..ShowProject::new("a.md")
        };
        let filter = ProjectFilter::from(&params);
        assert_eq!(
            filter.status,
            Some(StatusFilter::Unrecognized("blocked".to_string()))
        );
    }

    #[test]
    fn test_show_project_deserializes_with_defaults() {
        let params: ShowProject = serde_json::from_str(r#"{"path": "x.plan.md"}"#).unwrap();
        assert_eq!(params.path, "x.plan.md");
        assert!(params.status.is_none());
        assert!(!params.reverse);
    }
}
