// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::StoreError;
use crate::persistence::KeyValueStore;
use diagnostics::{log_debug, log_warn};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Key-value store kept as a single JSON object file on the host.
///
/// Every `set` rewrites the whole file through a temporary file in the same
/// directory, renamed into place, so readers never see a partial write.
/// A file that does not parse is overwritten by the next `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Current entries for a read-modify-write. Unparsable content is dropped.
    fn load_for_update(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match self.load() {
            Err(StoreError::Json(err)) => {
                let path = self.path.display().to_string();
                let err = err.to_string();
                log_warn!("Replacing unreadable store file {path}: {err}", path: path.as_str(), err: err.as_str());
                Ok(BTreeMap::new())
            }
            loaded => loaded,
        }
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.load_for_update()?;
        _ = entries.insert(key.to_string(), value.to_string());

        let dir = self.parent_dir();
        std::fs::create_dir_all(dir)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, &entries)?;
        tmp.flush()?;
        _ = tmp.persist(&self.path)?;

        let path = self.path.display().to_string();
        log_debug!("Stored {key} in {path}", key: key, path: path.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let tmp = tempdir().unwrap();
        let store = FileStore::new(tmp.path().join("absent.json"));
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_across_instances() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nested").join("store.json");

        let mut store = FileStore::new(&path);
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.set("a", "3").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("a").unwrap().as_deref(), Some("3"));
        assert_eq!(reopened.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_corrupt_file_fails_reads_until_rewritten() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("store.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(store.get("a"), Err(StoreError::Json(_))));

        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(FileStore::new(&path).get("b").unwrap(), None);
    }
}
