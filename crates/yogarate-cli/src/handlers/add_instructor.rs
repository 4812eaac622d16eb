//! Add-instructor command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the add-instructor command.
///
/// # Errors
///
/// Returns a usage error if `name` is blank, or a storage error if the
/// instructor could not be saved.
pub fn execute(ctx: &CliContext, name: &str) -> Result<()> {
    let instructor = ctx.service().add_instructor(name).map_err(CliError::from)?;
    println!("Added {} (id: {})", instructor.name, instructor.id);
    Ok(())
}
