//! History command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::format_rating;

/// Execute the history command: every rated class, most recent first.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let history = ctx.service().history();

    if history.is_empty() {
        println!("No classes rated yet. Start with `yogarate rate`.");
        return Ok(());
    }

    for entry in &history {
        println!("{}", entry.instructor.name);
        println!("{}", format_rating(&entry.rating));
        println!();
    }
    println!("{} rated class(es)", history.len());
    Ok(())
}
