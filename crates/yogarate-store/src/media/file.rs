//! File-backed key-value medium: one JSON file per key.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;
use yogarate_core::{KeyValueStore, RepositoryError};

use super::validate_key;

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes land in a sibling `.tmp` file that is renamed over the target, so
/// a reader sees either the previous value or the new one.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Open a medium rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            RepositoryError::Storage(format!("Failed to create {}: {e}", dir.display()))
        })?;
        Ok(Self { dir })
    }

    /// File that backs `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        validate_key(key)?;
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RepositoryError::Storage(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        validate_key(key)?;
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));

        fs::write(&tmp, value).map_err(|e| {
            RepositoryError::Storage(format!("Failed to write {}: {e}", tmp.display()))
        })?;
        fs::rename(&tmp, &path).map_err(|e| {
            RepositoryError::Storage(format!("Failed to replace {}: {e}", path.display()))
        })?;

        debug!(path = %path.display(), bytes = value.len(), "Wrote collection file");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        validate_key(key)?;
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RepositoryError::Storage(format!(
                "Failed to remove {}: {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_key_reads_as_none() {
        let temp = tempdir().unwrap();
        let kv = FileKeyValueStore::open(temp.path()).unwrap();
        assert_eq!(kv.get("instructors").unwrap(), None);
    }

    #[test]
    fn set_replaces_whole_value_and_leaves_no_temp_file() {
        let temp = tempdir().unwrap();
        let kv = FileKeyValueStore::open(temp.path().join("store")).unwrap();

        kv.set("ratings", "[1,2,3]").unwrap();
        kv.set("ratings", "[]").unwrap();

        assert_eq!(kv.get("ratings").unwrap().as_deref(), Some("[]"));
        assert!(kv.path_for("ratings").is_file());
        assert!(!temp.path().join("store").join("ratings.json.tmp").exists());
    }

    #[test]
    fn values_survive_reopening() {
        let temp = tempdir().unwrap();
        FileKeyValueStore::open(temp.path())
            .unwrap()
            .set("instructors", "[]")
            .unwrap();

        let reopened = FileKeyValueStore::open(temp.path()).unwrap();
        assert_eq!(reopened.get("instructors").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn remove_is_idempotent() {
        let temp = tempdir().unwrap();
        let kv = FileKeyValueStore::open(temp.path()).unwrap();
        kv.set("ratings", "[]").unwrap();
        kv.remove("ratings").unwrap();
        kv.remove("ratings").unwrap();
        assert_eq!(kv.get("ratings").unwrap(), None);
    }

    #[test]
    fn unreadable_value_is_a_storage_error() {
        let temp = tempdir().unwrap();
        let kv = FileKeyValueStore::open(temp.path()).unwrap();
        // A directory where the value file should be cannot be read as text.
        fs::create_dir(kv.path_for("ratings")).unwrap();
        assert!(matches!(kv.get("ratings"), Err(RepositoryError::Storage(_))));
    }
}
