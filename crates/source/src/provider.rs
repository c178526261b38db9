//! Where token source files come from.
//!
//! The loader only ever asks two questions of a provider: does a relative
//! path exist, and what are its bytes. Modification times are optional and
//! feed the staleness check.

use crate::error::SourceError;
use std::collections::HashMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::SystemTime;

pub trait SourceProvider: Send + Sync + Debug {
    /// Reads a source file by its path relative to the source root.
    fn read(&self, path: &str) -> Result<Arc<[u8]>, SourceError>;

    fn exists(&self, path: &str) -> bool;

    /// The last modification time, if the provider tracks one.
    fn modified(&self, _path: &str) -> Option<SystemTime> {
        None
    }

    /// A human-readable name for this provider (for logging).
    fn name(&self) -> &'static str;
}

/// Reads token files from a directory on disk.
#[derive(Debug, Clone)]
pub struct FilesystemSource {
    root: PathBuf,
}

impl FilesystemSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The absolute location of a relative source path.
    pub fn locate(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl SourceProvider for FilesystemSource {
    fn read(&self, path: &str) -> Result<Arc<[u8]>, SourceError> {
        std::fs::read(self.locate(path))
            .map(Arc::from)
            .map_err(|e| SourceError::Read {
                path: self.locate(path).display().to_string(),
                message: e.to_string(),
            })
    }

    fn exists(&self, path: &str) -> bool {
        self.locate(path).is_file()
    }

    fn modified(&self, path: &str) -> Option<SystemTime> {
        std::fs::metadata(self.locate(path))
            .and_then(|m| m.modified())
            .ok()
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}

/// Token files held in memory. Every file reports no modification time, so
/// builds over this provider are always considered stale.
#[derive(Debug, Default)]
pub struct InMemorySource {
    files: RwLock<HashMap<String, Arc<[u8]>>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a file.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Read` if the internal lock is poisoned.
    pub fn add(&self, path: impl Into<String>, contents: impl AsRef<[u8]>) -> Result<(), SourceError> {
        let path = path.into();
        let mut files = self.files.write().map_err(|_| SourceError::Read {
            path: path.clone(),
            message: "source store lock poisoned".to_string(),
        })?;
        files.insert(path, Arc::from(contents.as_ref()));
        Ok(())
    }

    /// Builder-style variant of [`InMemorySource::add`] for tests and fixtures.
    pub fn with_file(self, path: impl Into<String>, contents: impl AsRef<[u8]>) -> Result<Self, SourceError> {
        self.add(path, contents)?;
        Ok(self)
    }

    pub fn remove(&self, path: &str) -> Option<Arc<[u8]>> {
        self.files.write().ok()?.remove(path)
    }

    pub fn len(&self) -> usize {
        self.files.read().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.files.read().map(|f| f.is_empty()).unwrap_or(true)
    }
}

impl SourceProvider for InMemorySource {
    fn read(&self, path: &str) -> Result<Arc<[u8]>, SourceError> {
        let files = self.files.read().map_err(|_| SourceError::Read {
            path: path.to_string(),
            message: "source store lock poisoned".to_string(),
        })?;
        files.get(path).cloned().ok_or_else(|| SourceError::Read {
            path: path.to_string(),
            message: "not found".to_string(),
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.files
            .read()
            .map(|f| f.contains_key(path))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_roundtrip() {
        let source = InMemorySource::new()
            .with_file("spacing.json", br#"{"spacing":{}}"#)
            .unwrap();
        assert!(source.exists("spacing.json"));
        assert!(!source.exists("radius.json"));
        assert_eq!(&*source.read("spacing.json").unwrap(), br#"{"spacing":{}}"#);
        assert!(source.modified("spacing.json").is_none());
        assert!(source.remove("spacing.json").is_some());
        assert!(source.is_empty());
    }

    #[test]
    fn test_filesystem_reads_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("color")).unwrap();
        std::fs::write(dir.path().join("color/global.json"), "{}").unwrap();

        let source = FilesystemSource::new(dir.path());
        assert!(source.exists("color/global.json"));
        assert!(!source.exists("color"));
        assert!(source.modified("color/global.json").is_some());
        let err = source.read("color/missing.json").unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
