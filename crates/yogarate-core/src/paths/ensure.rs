//! Preparing a directory the store can write into.

use std::fs;
use std::path::Path;

use super::error::PathError;

const PROBE_FILE: &str = ".yogarate-probe";

/// Create `path` (and parents) if missing, then check it accepts writes.
pub fn ensure_writable_dir(path: &Path) -> Result<(), PathError> {
    if path.exists() && !path.is_dir() {
        return Err(PathError::NotADirectory(path.to_path_buf()));
    }

    fs::create_dir_all(path).map_err(|source| PathError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    probe_write(path)
}

fn probe_write(dir: &Path) -> Result<(), PathError> {
    let probe = dir.join(PROBE_FILE);
    fs::write(&probe, b"ok").map_err(|source| PathError::NotWritable {
        path: dir.to_path_buf(),
        source,
    })?;
    fs::remove_file(&probe).ok();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_parents_and_cleans_up_probe() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("a").join("b");

        ensure_writable_dir(&target).unwrap();

        assert!(target.is_dir());
        assert!(!target.join(PROBE_FILE).exists());
    }

    #[test]
    fn existing_directory_is_accepted() {
        let temp = tempdir().unwrap();
        ensure_writable_dir(temp.path()).unwrap();
        ensure_writable_dir(temp.path()).unwrap();
    }

    #[test]
    fn file_in_the_way_is_not_a_directory() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("store");
        fs::write(&target, b"x").unwrap();

        let err = ensure_writable_dir(&target).unwrap_err();
        assert!(matches!(err, PathError::NotADirectory(_)));
    }
}
