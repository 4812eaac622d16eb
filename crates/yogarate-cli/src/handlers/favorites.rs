//! Favorites command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::display_instructor_table;

/// Execute the favorites command: instructors with a favorited class.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let favorites = ctx.service().favorites();

    if favorites.is_empty() {
        println!("No favorites yet. Mark a class with `yogarate favorite <rating-id>`.");
        return Ok(());
    }

    display_instructor_table(&favorites);
    Ok(())
}
