//! Project operations for the PlanService.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use jiff::Timestamp;
use log::{debug, warn};
use tokio::task;

use super::{
    cache::{Fingerprint, ProjectCache},
    PlanService,
};
use crate::{
    error::{PlanError, Result, ResultExt},
    filter,
    models::{PercentageStat, Project, ProjectFilter, ProjectStat},
    parser, stats,
};

impl PlanService {
    /// Loads and parses the document at `path`.
    ///
    /// The returned project carries the file's modification time. Parsing is
    /// skipped when the cache holds a project for the same unchanged file.
    pub async fn get_project(&self, path: impl AsRef<Path>) -> Result<Project> {
        let project = self.load(path.as_ref()).await?;
        Ok(Arc::unwrap_or_clone(project))
    }

    /// Loads the document at `path` and applies `project_filter` to it.
    pub async fn get_filtered_project(
        &self,
        path: impl AsRef<Path>,
        project_filter: &ProjectFilter,
    ) -> Result<Project> {
        let project = self.load(path.as_ref()).await?;
        Ok(filter::filter(&project, project_filter))
    }

    /// Completion statistics over every task of the document.
    pub async fn get_project_stat(&self, path: impl AsRef<Path>) -> Result<PercentageStat> {
        let project = self.load(path.as_ref()).await?;
        Ok(stats::stat(&project))
    }

    /// Share of cancelled tasks among the tasks that are not done.
    pub async fn get_not_finished_stat(&self, path: impl AsRef<Path>) -> Result<PercentageStat> {
        let project = self.load(path.as_ref()).await?;
        Ok(stats::not_finished_stat(&project))
    }

    /// Full statistics breakdown of the document.
    pub async fn get_project_summary(&self, path: impl AsRef<Path>) -> Result<ProjectStat> {
        let project = self.load(path.as_ref()).await?;
        Ok(stats::project_stat(&project))
    }

    /// Reads the raw markdown of the document at `path`.
    ///
    /// Raw reads bypass the project cache.
    pub async fn read_document(&self, path: impl AsRef<Path>) -> Result<String> {
        let resolved = self.resolve(path)?;
        let root = self.root.clone();

        task::spawn_blocking(move || {
            ensure_inside_root(&resolved, root.as_deref())?;
            read_text(&resolved)
        })
            .await
            .with_context("Task join error")?
    }

    /// Resolve, then fetch from the cache or parse on the blocking pool.
    pub(crate) async fn load(&self, path: &Path) -> Result<Arc<Project>> {
        let resolved = self.resolve(path)?;
        let root = self.root.clone();
        let cache = Arc::clone(&self.cache);

        task::spawn_blocking(move || {
            ensure_inside_root(&resolved, root.as_deref())?;
            load_project(resolved, cache.as_ref())
        })
            .await
            .with_context("Task join error")?
    }
}

/// Rejects a resolved path whose target lies outside `root` once symlinks
/// are followed. `root` is already canonical.
fn ensure_inside_root(path: &Path, root: Option<&Path>) -> Result<()> {
    let Some(root) = root else {
        return Ok(());
    };

    let target = fs::canonicalize(path).map_err(|e| PlanError::from_io(path, e))?;
    if target.starts_with(root) {
        Ok(())
    } else {
        warn!(
            "Refusing {}: it links to {} outside the document root",
            path.display(),
            target.display()
        );
        Err(PlanError::invalid_input("path").with_reason(format!(
            "'{}' must stay inside the document root",
            path.display()
        )))
    }
}

fn load_project(path: PathBuf, cache: &dyn ProjectCache) -> Result<Arc<Project>> {
    let metadata = fs::metadata(&path).map_err(|e| PlanError::from_io(&path, e))?;
    if metadata.is_dir() {
        return Err(PlanError::invalid_input("path")
            .with_reason(format!("'{}' is a directory", path.display())));
    }

    let modified = match metadata.modified().map(Timestamp::try_from) {
        Ok(Ok(ts)) => Some(ts),
        _ => {
            warn!("No usable modification time for {}", path.display());
            None
        }
    };
    let fingerprint = modified.map(|modified| Fingerprint {
        modified,
        len: metadata.len(),
    });

    if let Some(fingerprint) = &fingerprint {
        if let Some(project) = cache.get(&path, fingerprint) {
            return Ok(project);
        }
    }

    let text = read_text(&path)?;
    let mut project = parser::parse(&text, &parser::title_from_path(&path));
    project.modified_at = modified;
    debug!("Loaded {} from disk", path.display());

    let project = Arc::new(project);
    match fingerprint {
        Some(fingerprint) => cache.insert(path, fingerprint, Arc::clone(&project)),
        None => cache.invalidate(&path),
    }
    Ok(project)
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| PlanError::from_io(path, e))?;
    String::from_utf8(bytes).map_err(|e| PlanError::FileSystem {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })
}
