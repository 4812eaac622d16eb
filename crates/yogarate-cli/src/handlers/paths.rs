//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics and debugging.

use anyhow::Result;
use yogarate_core::paths::ResolvedPaths;

use crate::error::CliError;

/// Execute the paths command.
///
/// Resolves and displays the data root and store files in `key = value`
/// format. Nothing is created on disk.
pub fn execute(data_dir: Option<&str>) -> Result<()> {
    let paths = ResolvedPaths::resolve(data_dir).map_err(CliError::from)?;
    println!("{paths}");
    Ok(())
}
