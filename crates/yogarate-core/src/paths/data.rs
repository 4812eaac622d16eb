//! Data root and store directory resolution.

use std::env;
use std::path::{Path, PathBuf};

use super::ensure::ensure_writable_dir;
use super::error::PathError;
use super::platform::{default_data_root, normalize_user_path};

/// Environment variable that overrides the data root.
pub const DATA_DIR_ENV: &str = "YOGARATE_DATA_DIR";

/// Subdirectory of the data root holding the persisted collections.
pub const STORE_DIR_NAME: &str = "store";

/// How the data root was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataRootSource {
    /// The user passed an explicit path (e.g., `--data-dir`).
    Explicit,
    /// The path came from `YOGARATE_DATA_DIR` / `.env`.
    EnvVar,
    /// Platform default (`~/.local/share/yogarate` on Linux).
    Default,
}

/// Resolution result for the data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRootResolution {
    /// The resolved data root.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: DataRootSource,
}

/// Resolve the data root without touching the file system.
///
/// Resolution order:
/// 1. Explicit path provided by caller (highest priority)
/// 2. `YOGARATE_DATA_DIR` environment variable
/// 3. Platform data directory
pub fn resolve_data_root(explicit: Option<&str>) -> Result<DataRootResolution, PathError> {
    if let Some(path_str) = explicit {
        return Ok(DataRootResolution {
            path: normalize_user_path(path_str)?,
            source: DataRootSource::Explicit,
        });
    }

    if let Ok(env_path) = env::var(DATA_DIR_ENV) {
        if !env_path.trim().is_empty() {
            return Ok(DataRootResolution {
                path: normalize_user_path(&env_path)?,
                source: DataRootSource::EnvVar,
            });
        }
    }

    Ok(DataRootResolution {
        path: default_data_root()?,
        source: DataRootSource::Default,
    })
}

/// Get the store directory under `root`, creating it if needed.
///
/// Holds one JSON file per persisted collection. Fails early if the
/// directory cannot be written.
pub fn store_dir(root: &Path) -> Result<PathBuf, PathError> {
    let dir = root.join(STORE_DIR_NAME);
    ensure_writable_dir(&dir)?;
    Ok(dir)
}
