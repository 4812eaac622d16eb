//! Init command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the init command.
///
/// Bootstrap has already seeded the store, so this only reports what is in it.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let instructors = ctx.service().instructors(None).len();
    let classes = ctx.service().history().len();
    println!("Store ready at {}", ctx.data_root().display());
    println!("{instructors} instructors, {classes} rated classes");
    Ok(())
}
