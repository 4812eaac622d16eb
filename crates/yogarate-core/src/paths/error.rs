//! Errors from resolving and preparing the data directory.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why the data root or store directory is unusable.
#[derive(Debug, Error)]
pub enum PathError {
    /// No explicit root was given and the platform has no data directory.
    #[error("No platform data directory; pass --data-dir or set YOGARATE_DATA_DIR")]
    NoDataDir,

    /// The path starts with `~` but the home directory is unknown.
    #[error("Cannot expand `~`: home directory is unknown")]
    NoHomeDir,

    #[error("Data directory path is empty")]
    EmptyPath,

    /// A relative path could not be anchored to the working directory.
    #[error("Cannot resolve relative path {path}: {source}")]
    Relative {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    #[error("Cannot create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} is not writable: {source}")]
    NotWritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
