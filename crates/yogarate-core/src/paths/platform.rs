//! Platform-specific path resolution.
//!
//! Private helpers for resolving platform-appropriate locations. Public API
//! is exposed through sibling modules.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Directory name used under the platform data directory.
pub(super) const APP_DIR_NAME: &str = "yogarate";

/// Platform default data root (e.g., `~/.local/share/yogarate`).
pub(super) fn default_data_root() -> Result<PathBuf, PathError> {
    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join(APP_DIR_NAME))
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub(super) fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        return Ok(expanded);
    }
    match env::current_dir() {
        Ok(cwd) => Ok(cwd.join(expanded)),
        Err(source) => Err(PathError::Relative {
            path: expanded,
            source,
        }),
    }
}
