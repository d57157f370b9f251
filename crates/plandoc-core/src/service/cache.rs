//! Read-through cache of parsed projects.
//!
//! Entries are keyed by path and validated against a [`Fingerprint`] of the
//! source file (modification time and length). A lookup whose fingerprint
//! differs from the stored one misses, and the caller replaces the entry with
//! a freshly parsed project. Entries are shared as `Arc<Project>` and swapped
//! whole under the write lock, so readers never see a partially updated
//! tree.

use std::{
    collections::HashMap,
    fmt,
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
};

use jiff::Timestamp;
use log::debug;

use crate::models::Project;

/// Identity of a source file's content as far as the cache is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint {
    /// Last modification time
    pub modified: Timestamp,
    /// File length in bytes
    pub len: u64,
}

/// Storage for parsed projects, injectable into the plan service.
pub trait ProjectCache: Send + Sync + fmt::Debug {
    /// Return the cached project for `path` if it was parsed from a file
    /// with the same fingerprint.
    fn get(&self, path: &Path, fingerprint: &Fingerprint) -> Option<Arc<Project>>;

    /// Store (or replace) the project parsed from `path`.
    fn insert(&self, path: PathBuf, fingerprint: Fingerprint, project: Arc<Project>);

    /// Drop any entry for `path`.
    fn invalidate(&self, path: &Path);
}

#[derive(Debug)]
struct Entry {
    fingerprint: Fingerprint,
    project: Arc<Project>,
}

/// Process-wide cache keyed by path and file fingerprint.
#[derive(Debug, Default)]
pub struct MtimeCache {
    entries: RwLock<HashMap<PathBuf, Entry>>,
}

impl MtimeCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached documents.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the cache holds no documents.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProjectCache for MtimeCache {
    fn get(&self, path: &Path, fingerprint: &Fingerprint) -> Option<Arc<Project>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.get(path)?;
        if entry.fingerprint == *fingerprint {
            debug!("Cache hit for {}", path.display());
            Some(Arc::clone(&entry.project))
        } else {
            debug!("Cache entry for {} is stale", path.display());
            None
        }
    }

    fn insert(&self, path: PathBuf, fingerprint: Fingerprint, project: Arc<Project>) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            path,
            Entry {
                fingerprint,
                project,
            },
        );
    }

    fn invalidate(&self, path: &Path) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(path);
    }
}

/// Cache that never stores anything; every request re-parses the file.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl ProjectCache for NoCache {
    fn get(&self, _path: &Path, _fingerprint: &Fingerprint) -> Option<Arc<Project>> {
        None
    }

    fn insert(&self, _path: PathBuf, _fingerprint: Fingerprint, _project: Arc<Project>) {}

    fn invalidate(&self, _path: &Path) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fingerprint(second: i64, len: u64) -> Fingerprint {
        Fingerprint {
            modified: Timestamp::from_second(second).unwrap(),
            len,
        }
    }

    #[test]
    fn test_mtime_cache_hit_requires_same_fingerprint() {
        let cache = MtimeCache::new();
        let path = PathBuf::from("a.plan.md");
        let project = Arc::new(Project::new("A"));
        cache.insert(path.clone(), fingerprint(10, 5), Arc::clone(&project));

        let hit = cache.get(&path, &fingerprint(10, 5)).unwrap();
        assert!(Arc::ptr_eq(&hit, &project));
        assert!(cache.get(&path, &fingerprint(11, 5)).is_none());
        assert!(cache.get(&path, &fingerprint(10, 6)).is_none());
        assert!(cache.get(Path::new("b.plan.md"), &fingerprint(10, 5)).is_none());
    }

    #[test]
    fn test_mtime_cache_insert_replaces_entry() {
        let cache = MtimeCache::new();
        let path = PathBuf::from("a.plan.md");
        cache.insert(path.clone(), fingerprint(1, 1), Arc::new(Project::new("old")));
        cache.insert(path.clone(), fingerprint(2, 1), Arc::new(Project::new("new")));

        assert_eq!(cache.len(), 1);
        assert!(cache.get(&path, &fingerprint(1, 1)).is_none());
        assert_eq!(cache.get(&path, &fingerprint(2, 1)).unwrap().title, "new");
    }

    #[test]
    fn test_mtime_cache_invalidate() {
        let cache = MtimeCache::new();
        let path = PathBuf::from("a.plan.md");
        cache.insert(path.clone(), fingerprint(1, 1), Arc::new(Project::new("A")));
        cache.invalidate(&path);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_no_cache_never_hits() {
        let cache = NoCache;
        let path = PathBuf::from("a.plan.md");
        cache.insert(path.clone(), fingerprint(1, 1), Arc::new(Project::new("A")));
        assert!(cache.get(&path, &fingerprint(1, 1)).is_none());
    }
}
