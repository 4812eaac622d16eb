//! Path utilities for yogarate data directories.
//!
//! This module provides the canonical path resolution for all yogarate components:
//! - Data root (explicit flag, `YOGARATE_DATA_DIR`, or platform default)
//! - Store directory holding the persisted collections
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - OS-specific logic is kept private in `platform`

mod data;
mod ensure;
mod error;
mod platform;
mod resolver;

#[cfg(test)]
mod test_utils;

pub use error::PathError;

pub use data::{
    DATA_DIR_ENV, DataRootResolution, DataRootSource, STORE_DIR_NAME, resolve_data_root,
    store_dir,
};

pub use ensure::ensure_writable_dir;

pub use resolver::ResolvedPaths;
