//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. The data root is resolved, the file-backed store is
//! opened and seeded, and the result is handed to `RatingsService`.
//!
//! Command handlers receive the composed `CliContext` and delegate to it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use yogarate_core::paths::resolve_data_root;
use yogarate_core::{RatingStore, RatingsService};
use yogarate_store::open_store;

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Explicit data root from `--data-dir`.
    pub data_dir: Option<String>,
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The ratings facade.
    pub service: RatingsService,
    /// Root directory the store lives under.
    pub data_root: PathBuf,
}

impl CliContext {
    /// Access the ratings service.
    pub const fn service(&self) -> &RatingsService {
        &self.service
    }

    /// Access the resolved data root.
    pub fn data_root(&self) -> &Path {
        &self.data_root
    }
}

/// Bootstrap the CLI application.
///
/// Resolves the data root (`--data-dir`, then `YOGARATE_DATA_DIR`, then the
/// platform default), opens the store under it and seeds first-run defaults.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let root = resolve_data_root(config.data_dir.as_deref()).map_err(CliError::from)?;
    debug!(root = %root.path.display(), source = ?root.source, "Resolved data root");

    let store = open_store(&root.path).map_err(CliError::from)?;

    Ok(CliContext {
        service: RatingsService::new(store),
        data_root: root.path,
    })
}

/// Bootstrap with a custom store (for testing).
///
/// The store is initialized here, like [`bootstrap`] does for the file store.
pub fn bootstrap_with(store: Arc<dyn RatingStore>, data_root: PathBuf) -> Result<CliContext> {
    let service = RatingsService::new(store);
    service.initialize().map_err(CliError::from)?;
    Ok(CliContext { service, data_root })
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr so command output on stdout stays clean. `RUST_LOG`
/// wins when set; otherwise `--verbose` selects `debug` and the default is
/// `warn`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn bootstrap_seeds_store_under_explicit_root() {
        let temp = tempdir().unwrap();
        let config = CliConfig {
            data_dir: Some(temp.path().to_string_lossy().into_owned()),
        };

        let ctx = bootstrap(config).unwrap();
        assert_eq!(ctx.service().instructors(None).len(), 3);
        assert!(ctx.data_root().join("store").join("ratings.json").is_file());
    }

    #[test]
    fn bootstrap_is_repeatable() {
        let temp = tempdir().unwrap();
        let config = CliConfig {
            data_dir: Some(temp.path().to_string_lossy().into_owned()),
        };

        let first = bootstrap(config.clone()).unwrap();
        first.service().add_instructor("Dana Lee").unwrap();

        let second = bootstrap(config).unwrap();
        assert_eq!(second.service().instructors(None).len(), 4);
    }
}
