//! Rate command handler.

use anyhow::Result;
use tracing::debug;
use yogarate_core::{Dimensions, InstructorChoice, InstructorId, RatingSubmission};

use crate::bootstrap::CliContext;
use crate::commands::RateArgs;
use crate::error::CliError;
use crate::presentation::format_rating;

/// Turn parsed arguments into a submission.
///
/// A `--new-instructor` name that already exists (ignoring case) resolves to
/// that instructor instead of creating a second one.
pub fn build_submission(ctx: &CliContext, args: RateArgs) -> RatingSubmission {
    let instructor = match (args.instructor, args.new_instructor) {
        (Some(id), _) => Some(InstructorChoice::Existing(InstructorId::new(id))),
        (None, Some(name)) => match ctx.service().find_instructor_by_name(&name) {
            Some(existing) => {
                debug!(id = %existing.id, "Name matches an existing instructor");
                Some(InstructorChoice::Existing(existing.id))
            }
            None => Some(InstructorChoice::New(name)),
        },
        (None, None) => None,
    };

    RatingSubmission {
        instructor,
        class_type: args.class_type,
        studio_location: args.location,
        overall_rating: args.overall,
        dimensions: Dimensions {
            intensity: args.intensity,
            flow: args.flow,
            energy: args.energy,
            music: args.music,
        },
        notes: args.notes,
        is_favorite: args.favorite,
    }
}

/// Execute the rate command.
///
/// # Errors
///
/// Returns a usage error when no instructor was given, or a storage error if
/// the rating could not be saved.
pub fn execute(ctx: &CliContext, args: RateArgs) -> Result<()> {
    let submission = build_submission(ctx, args);
    let rating = ctx
        .service()
        .submit_rating(submission)
        .map_err(CliError::from)?;

    println!("Saved rating for instructor {}", rating.instructor_id);
    println!("{}", format_rating(&rating));
    Ok(())
}
