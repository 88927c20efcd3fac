//! Entry stores - where synthesized entries end up.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::GenError;

/// Create-only sink for rendered entries.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Store `content` under `name`. Fails with `AlreadyExists` instead of overwriting.
    async fn create(&self, name: &str, content: &str) -> Result<(), GenError>;
}

/// Writes each entry to `<dir>/<name>.<extension>`.
pub struct FsStore {
    dir: PathBuf,
    extension: String,
}

impl FsStore {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        if self.extension.is_empty() {
            self.dir.join(name)
        } else {
            self.dir.join(format!("{name}.{}", self.extension))
        }
    }

    /// Create the output directory if it is missing.
    pub async fn prepare(&self) -> Result<(), GenError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| GenError::Io {
                path: self.dir.clone(),
                source,
            })
    }
}

#[async_trait]
impl EntryStore for FsStore {
    async fn create(&self, name: &str, content: &str) -> Result<(), GenError> {
        let path = self.path_for(name);

        // create_new fails atomically if the file exists
        let mut file = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(GenError::AlreadyExists { path });
            }
            Err(source) => return Err(GenError::Io { path, source }),
        };

        let written = match file.write_all(content.as_bytes()).await {
            Ok(()) => file.flush().await,
            Err(e) => Err(e),
        };
        drop(file);

        match written {
            Ok(()) => Ok(()),
            Err(source) => Err(discard_partial(path, source).await),
        }
    }
}

/// Remove a file we created but could not finish, so a rerun does not see it as taken.
async fn discard_partial(path: PathBuf, source: std::io::Error) -> GenError {
    if let Err(e) = tokio::fs::remove_file(&path).await {
        tracing::warn!(path = %path.display(), error = %e, "Failed to remove partial entry");
    }
    GenError::Io { path, source }
}

/// In-memory store with the same create-only semantics.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an entry, e.g. to simulate an existing file.
    pub fn insert(&self, name: &str, content: &str) {
        self.lock().insert(name.to_string(), content.to_string());
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.lock().get(name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        // a poisoned map is still a valid map
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn create(&self, name: &str, content: &str) -> Result<(), GenError> {
        let mut entries = self.lock();
        if entries.contains_key(name) {
            return Err(GenError::AlreadyExists {
                path: PathBuf::from(name),
            });
        }
        entries.insert(name.to_string(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_discard_partial_removes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = FsStore::new(dir.path(), "md");
        let path = store.path_for("half");
        std::fs::write(&path, "trunc").unwrap();

        let source = std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full");
        let err = discard_partial(path.clone(), source).await;

        assert!(matches!(&err, GenError::Io { path: p, .. } if *p == path));
        assert!(!path.exists());

        // the name is free again
        store.create("half", "whole").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "whole");
    }
}
