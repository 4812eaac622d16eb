//! Show command handler: one instructor's profile.

use anyhow::Result;
use yogarate_core::InstructorId;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{
    format_average, format_dimension_averages, format_group, format_rating, print_separator,
};

/// Execute the show command.
///
/// Prints the overall average, the per-dimension averages, both breakdowns
/// and every rating, most recent first.
///
/// # Errors
///
/// Returns an error if no instructor has the given id.
pub fn execute(ctx: &CliContext, instructor_id: &str) -> Result<()> {
    let id = InstructorId::new(instructor_id);
    let profile = ctx
        .service()
        .instructor_profile(&id)
        .ok_or_else(|| CliError::Core(format!("No instructor with id {instructor_id}")))?;

    println!("{} ({})", profile.instructor.name, profile.instructor.initials());
    println!(
        "Average: {}  ({} classes)",
        format_average(profile.average),
        profile.ratings.len()
    );

    if profile.ratings.is_empty() {
        println!();
        println!("No ratings yet. Rate a class with `yogarate rate --instructor {id}`.");
        return Ok(());
    }

    println!("{}", format_dimension_averages(&profile.dimension_averages));

    println!();
    println!("By class type");
    print_separator(60);
    for group in &profile.by_class_type {
        println!("{}", format_group(group));
    }

    println!();
    println!("By studio location");
    print_separator(60);
    for group in &profile.by_studio_location {
        println!("{}", format_group(group));
    }

    println!();
    println!("Ratings");
    print_separator(60);
    for rating in &profile.ratings {
        println!("{}", format_rating(rating));
    }
    Ok(())
}
