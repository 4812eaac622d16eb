//! Pure path resolver for CLI introspection.
//!
//! Captures all resolved paths in one call and backs the `yogarate paths`
//! command.

use std::path::PathBuf;

use super::{DataRootSource, PathError, STORE_DIR_NAME, resolve_data_root};

/// File names of the persisted collections inside the store directory.
const COLLECTION_FILES: [&str; 2] = ["instructors.json", "ratings.json"];

/// All resolved paths captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory for application data.
    pub data_root: PathBuf,
    /// How the data root was resolved.
    pub data_root_source: DataRootSource,
    /// Directory holding the persisted collections.
    pub store_dir: PathBuf,
    /// One file per collection.
    pub collection_files: Vec<PathBuf>,
}

impl ResolvedPaths {
    /// Resolve all paths, honoring an explicit data root override.
    ///
    /// Nothing is created on disk.
    pub fn resolve(data_dir: Option<&str>) -> Result<Self, PathError> {
        let root = resolve_data_root(data_dir)?;
        let store_dir = root.path.join(STORE_DIR_NAME);
        let collection_files = COLLECTION_FILES
            .iter()
            .map(|name| store_dir.join(name))
            .collect();

        Ok(Self {
            data_root: root.path,
            data_root_source: root.source,
            store_dir,
            collection_files,
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "data_root = {}", self.data_root.display())?;
        writeln!(f, "data_root_source = {:?}", self.data_root_source)?;
        write!(f, "store_dir = {}", self.store_dir.display())?;
        for file in &self.collection_files {
            write!(f, "\ncollection = {}", file.display())?;
        }
        Ok(())
    }
}
