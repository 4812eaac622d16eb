//! Instructors command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::display_instructor_table;

/// Execute the instructors command.
///
/// # Arguments
///
/// * `ctx` - The CLI context
/// * `search` - Optional case-insensitive name filter
pub fn execute(ctx: &CliContext, search: Option<&str>) -> Result<()> {
    let summaries = ctx.service().instructors(search);

    if summaries.is_empty() {
        match search {
            Some(query) => println!("No instructors match \"{query}\"."),
            None => println!("No instructors yet. Add one with `yogarate add-instructor`."),
        }
        return Ok(());
    }

    display_instructor_table(&summaries);
    println!();
    println!("{} instructor(s)", summaries.len());
    Ok(())
}
