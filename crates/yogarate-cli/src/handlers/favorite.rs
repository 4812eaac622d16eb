//! Favorite command handler: toggle a rating's favorite flag.

use anyhow::Result;
use yogarate_core::RatingId;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the favorite command.
///
/// An unknown rating id changes nothing and is not an error.
pub fn execute(ctx: &CliContext, rating_id: &str) -> Result<()> {
    let id = RatingId::new(rating_id);
    match ctx.service().toggle_favorite(&id).map_err(CliError::from)? {
        Some(rating) if rating.is_favorite => println!("Rating {id} is now a favorite"),
        Some(_) => println!("Rating {id} is no longer a favorite"),
        None => println!("No rating with id {id}; nothing changed"),
    }
    Ok(())
}
