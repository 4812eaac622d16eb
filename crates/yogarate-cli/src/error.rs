//! Failures reported by `yogarate` and the exit code each one maps to.

use thiserror::Error;
use yogarate_core::{CoreError, PathError};

/// An error as reported to the terminal.
#[derive(Debug, Error)]
pub enum CliError {
    /// Anything else, such as an unknown instructor id.
    #[error("{0}")]
    Core(String),

    /// Invalid input, including rejected rating submissions.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error, such as an unusable data directory.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The store could not be written.
    #[error("{0}")]
    Storage(String),
}

impl CliError {
    /// Process exit status: 1 generally, 2 for rejected input, and the
    /// sysexits.h codes for storage (74) and configuration (78) failures.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Storage(_) => 74,  // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => Self::Storage(repo_err.to_string()),
            CoreError::Path(path_err) => Self::from(path_err),
            CoreError::Validation(msg) => Self::Arguments(msg),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yogarate_core::RepositoryError;

    #[test]
    fn validation_maps_to_usage_exit_code() {
        let err = CliError::from(CoreError::Validation("Please select an instructor".into()));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Invalid arguments: Please select an instructor");
    }

    #[test]
    fn storage_failures_map_to_io_exit_code() {
        let err = CliError::from(CoreError::Repository(RepositoryError::Storage(
            "disk full".into(),
        )));
        assert_eq!(err.exit_code(), 74);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn path_errors_map_to_config_exit_code() {
        let err = CliError::from(CoreError::Path(PathError::EmptyPath));
        assert_eq!(err.exit_code(), 78);
    }
}
