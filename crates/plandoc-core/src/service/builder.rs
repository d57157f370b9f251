//! Builder for creating and configuring PlanService instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use super::{
    cache::{MtimeCache, NoCache, ProjectCache},
    PlanService,
};
use crate::error::{PlanError, Result};

/// Builder for creating and configuring PlanService instances.
#[derive(Debug, Clone)]
pub struct PlanServiceBuilder {
    root: Option<PathBuf>,
    cache: Option<Arc<dyn ProjectCache>>,
}

impl PlanServiceBuilder {
    /// Creates a new builder with default settings: no root directory and a
    /// shared [`MtimeCache`].
    pub fn new() -> Self {
        Self {
            root: None,
            cache: None,
        }
    }

    /// Sets the directory document paths are resolved against.
    ///
    /// Without a root, paths are used exactly as given. With a root, every
    /// path is taken relative to it (a leading `/` included) and `..`
    /// components are rejected.
    pub fn with_root<P: AsRef<Path>>(mut self, root: Option<P>) -> Self {
        if let Some(root) = root {
            self.root = Some(root.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given cache implementation.
    pub fn with_cache(mut self, cache: Arc<dyn ProjectCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Disables caching: every request reads and parses the file again.
    pub fn without_cache(self) -> Self {
        self.with_cache(Arc::new(NoCache))
    }

    /// Builds the configured service.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::NotFound` if the root directory does not exist
    /// Returns `PlanError::InvalidInput` if the root is not a directory
    pub async fn build(self) -> Result<PlanService> {
        let root = match self.root {
            Some(root) => Some(Self::canonical_root(root).await?),
            None => None,
        };
        let cache = self
            .cache
            .unwrap_or_else(|| Arc::new(MtimeCache::new()) as Arc<dyn ProjectCache>);

        Ok(PlanService::new(root, cache))
    }

    async fn canonical_root(root: PathBuf) -> Result<PathBuf> {
        let canonical = tokio::fs::canonicalize(&root)
            .await
            .map_err(|e| PlanError::from_io(&root, e))?;

        let metadata = tokio::fs::metadata(&canonical)
            .await
            .map_err(|e| PlanError::from_io(&canonical, e))?;
        if !metadata.is_dir() {
            return Err(PlanError::invalid_input("root")
                .with_reason(format!("'{}' is not a directory", root.display())));
        }
        Ok(canonical)
    }
}

impl Default for PlanServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
