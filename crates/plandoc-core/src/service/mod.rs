//! High-level service API for loading plan documents.
//!
//! [`PlanService`] is the single entry point both front ends use. It resolves
//! document paths, reads and parses files on the blocking thread pool, and
//! keeps parsed projects in a [`ProjectCache`] so repeated requests for an
//! unchanged file skip the parser entirely.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`PlanService`] instances with configuration
//! - [`cache`]: The cache trait and its two implementations
//! - [`project_ops`]: Project retrieval, filtering and statistics
//!
//! # Usage Examples
//!
//! ```rust
//! use plandoc_core::{PlanServiceBuilder, models::ProjectFilter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = PlanServiceBuilder::new()
//!     .with_root(Some("docs/plans"))
//!     .build()
//!     .await?;
//!
//! let project = service.get_project("release.plan.md").await?;
//! let stat = service.get_project_stat("release.plan.md").await?;
//! println!("{}: {}", project.title, stat);
//!
//! let mine = service
//!     .get_filtered_project(
//!         "release.plan.md",
//!         &ProjectFilter {
//!             assignee: Some("ann".to_string()),
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Component, Path, PathBuf},
    sync::Arc,
};

pub mod builder;
pub mod cache;
pub mod project_ops;


pub use builder::PlanServiceBuilder;
pub use cache::{Fingerprint, MtimeCache, NoCache, ProjectCache};

use crate::error::{PlanError, Result};

/// Main service interface for reading plan documents.
#[derive(Debug, Clone)]
pub struct PlanService {
    pub(crate) root: Option<PathBuf>,
    pub(crate) cache: Arc<dyn ProjectCache>,
}

impl PlanService {
    /// Creates a new service with the given root directory and cache.
    pub(crate) fn new(root: Option<PathBuf>, cache: Arc<dyn ProjectCache>) -> Self {
        Self { root, cache }
    }

    /// Directory document paths are resolved against, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Map a requested document path to the file to read.
    ///
    /// Without a root the path is returned unchanged. With a root the path
    /// is joined onto it; a leading `/` means "relative to the root" and any
    /// `..` component is rejected so requests cannot leave the directory.
    /// Symlinks are checked when the file is read, since resolution is
    /// purely lexical.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(PlanError::invalid_input("path").with_reason("Path must not be empty"));
        }

        let Some(root) = &self.root else {
            return Ok(path.to_path_buf());
        };

        let mut resolved = root.clone();
        for component in path.components() {
            match component {
                Component::RootDir | Component::CurDir => {}
                Component::Normal(part) => resolved.push(part),
                Component::ParentDir | Component::Prefix(_) => {
                    return Err(PlanError::invalid_input("path").with_reason(format!(
                        "'{}' must stay inside the document root",
                        path.display()
                    )));
                }
            }
        }

        if resolved == *root {
            return Err(PlanError::invalid_input("path")
                .with_reason(format!("'{}' does not name a document", path.display())));
        }
        Ok(resolved)
    }
}
