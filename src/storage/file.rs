//! File-backed store.
//!
//! # Responsibilities
//! - Load a JSON object of string values at open
//! - Keep entries in memory for reads
//! - Rewrite the whole file after every mutation
//!
//! # Design Decisions
//! - A missing file is an empty store, not an error
//! - Writes go to a sibling temp file and are renamed into place

use dashmap::DashMap;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::observability::metrics;
use crate::storage::{KeyValueStore, StorageError};

/// A store persisted as a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    inner: Arc<DashMap<String, String>>,
    path: PathBuf,
    // Serializes file rewrites.
    write_lock: Arc<Mutex<()>>,
}

impl FileStore {
    /// Open the store at `path`, loading existing entries if the file exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let inner = DashMap::new();

        if path.exists() {
            let reader = BufReader::new(File::open(&path)?);
            let map: BTreeMap<String, String> = serde_json::from_reader(reader)?;
            for (k, v) in map {
                inner.insert(k, v);
            }
            tracing::info!(path = %path.display(), keys = inner.len(), "Loaded store file");
        } else {
            tracing::debug!(path = %path.display(), "Store file missing, starting empty");
        }

        Ok(Self {
            inner: Arc::new(inner),
            path,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StorageError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Sorted so the file diffs cleanly.
        let map: BTreeMap<String, String> = self
            .inner
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect();

        let tmp = temp_path(&self.path);
        {
            let mut writer = BufWriter::new(File::create(&tmp)?);
            serde_json::to_writer_pretty(&mut writer, &map)?;
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path)?;

        metrics::record_store_write(map.len());
        tracing::trace!(path = %self.path.display(), keys = map.len(), "Saved store file");
        Ok(())
    }
}

/// Sibling of `path` with `.tmp` appended to the full file name.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).map(|r| r.value().clone())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.inner.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("store.json")).unwrap();
        assert_eq!(store.get("anything"), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = FileStore::open(&path).unwrap();
        store.set("isAuthenticated", "true").unwrap();
        store.set("invoices", "[]").unwrap();
        store.remove("invoices").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("isAuthenticated").as_deref(), Some("true"));
        assert_eq!(reopened.get("invoices"), None);
    }

    #[test]
    fn test_temp_path_never_equals_store_path() {
        assert_eq!(temp_path(Path::new("data/store.json")), PathBuf::from("data/store.json.tmp"));
        assert_eq!(temp_path(Path::new("data/store.tmp")), PathBuf::from("data/store.tmp.tmp"));
    }

    #[test]
    fn test_store_file_with_tmp_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.tmp");

        let store = FileStore::open(&path).unwrap();
        store.set("isAuthenticated", "true").unwrap();
        store.set("userSettings", "{}").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("isAuthenticated").as_deref(), Some("true"));
        assert_eq!(reopened.get("userSettings").as_deref(), Some("{}"));
        assert!(!dir.path().join("store.tmp.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }
}
