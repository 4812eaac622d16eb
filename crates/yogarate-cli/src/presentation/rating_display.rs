//! Rendering of instructors, ratings and breakdowns.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use yogarate_core::{Average, Dimension, InstructorSummary, Rating, RatingGroup, Score};

use super::tables::{format_optional, print_separator, truncate_string};

const NAME_WIDTH: usize = 24;
const ID_WIDTH: usize = 38;

/// Mean rating for display, or the "no ratings yet" placeholder.
pub fn format_average(average: Option<Average>) -> String {
    format_optional(average.as_ref(), "No ratings yet")
}

/// Filled and empty stars for a 1-5 score, e.g. `★★★★☆`.
pub fn stars(score: Score) -> String {
    let filled = usize::from(score.get());
    let empty = usize::from(Score::MAX) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Calendar date of a rating, e.g. `Mar 9, 2024`.
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// One rating as a short block: headline, sub-scores and notes.
pub fn format_rating(rating: &Rating) -> String {
    let favorite = if rating.is_favorite { "  ♥" } else { "" };
    let mut out = format!(
        "{}  {} @ {}  {} ({}){}\n",
        format_date(rating.created_at),
        rating.class_type,
        rating.studio_location,
        stars(rating.overall_rating),
        rating.overall_rating,
        favorite,
    );

    let dims: Vec<String> = Dimension::ALL
        .into_iter()
        .map(|d| format!("{} {}", d.label(), rating.dimensions.get(d)))
        .collect();
    out.push_str(&format!("    {}\n", dims.join("  ")));

    if let Some(notes) = &rating.notes {
        out.push_str(&format!("    \"{notes}\"\n"));
    }
    out.push_str(&format!("    id: {}", rating.id));
    out
}

/// Per-dimension averages on one line, e.g. `Intensity 5.0  Flow 4.5`.
pub fn format_dimension_averages(averages: &[(Dimension, Option<Average>)]) -> String {
    averages
        .iter()
        .map(|(d, avg)| format!("{} {}", d.label(), format_optional(avg.as_ref(), "-")))
        .collect::<Vec<_>>()
        .join("  ")
}

/// One breakdown row with its chart color.
pub fn format_group<K: Display>(group: &RatingGroup<K>) -> String {
    let noun = if group.count == 1 { "class" } else { "classes" };
    format!(
        "{:<20} {:>2} {:<8} avg {}  {}",
        group.key.to_string(),
        group.count,
        noun,
        group.average_overall_rating,
        group.color(),
    )
}

/// Print instructor summaries as a table.
pub fn display_instructor_table(summaries: &[InstructorSummary]) {
    println!(
        "{:<name$} {:<id$} {:>14} {:>8} {:>10}",
        "Name",
        "ID",
        "Average",
        "Ratings",
        "Favorites",
        name = NAME_WIDTH,
        id = ID_WIDTH,
    );
    print_separator(NAME_WIDTH + ID_WIDTH + 35);

    for summary in summaries {
        println!(
            "{:<name$} {:<id$} {:>14} {:>8} {:>10}",
            truncate_string(&summary.instructor.name, NAME_WIDTH),
            summary.instructor.id.to_string(),
            format_average(summary.average),
            summary.rating_count,
            summary.favorite_count,
            name = NAME_WIDTH,
            id = ID_WIDTH,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use yogarate_core::services::stats::group_by_class_type;
    use yogarate_core::{ClassType, Dimensions, NewRating, StudioLocation};

    fn score(v: u8) -> Score {
        Score::new(v).unwrap()
    }

    fn sample(notes: Option<&str>, is_favorite: bool) -> Rating {
        NewRating {
            instructor_id: "1".into(),
            class_type: ClassType::Yoga2,
            studio_location: StudioLocation::CapitolHill,
            overall_rating: score(4),
            dimensions: Dimensions {
                intensity: score(5),
                flow: score(4),
                energy: score(3),
                music: score(2),
            },
            notes: notes.map(str::to_string),
            is_favorite,
        }
        .into_rating("r-1".into(), Utc.with_ymd_and_hms(2024, 3, 9, 18, 30, 0).unwrap())
    }

    #[test]
    fn stars_fill_to_score() {
        assert_eq!(stars(score(1)), "★☆☆☆☆");
        assert_eq!(stars(score(4)), "★★★★☆");
        assert_eq!(stars(score(5)), "★★★★★");
    }

    #[test]
    fn missing_average_is_not_zero() {
        assert_eq!(format_average(None), "No ratings yet");
        let avg = Average::of_scores([score(4), score(5)]);
        assert_eq!(format_average(avg), "4.5");
    }

    #[test]
    fn rating_block_lists_every_dimension() {
        let text = format_rating(&sample(Some("Great playlist"), true));
        assert!(text.starts_with("Mar 9, 2024  Yoga 2 @ Capitol Hill  ★★★★☆ (4)  ♥"));
        assert!(text.contains("Intensity 5  Flow 4  Energy 3  Music 2"));
        assert!(text.contains("\"Great playlist\""));
        assert!(text.ends_with("id: r-1"));
    }

    #[test]
    fn rating_block_omits_missing_notes() {
        let text = format_rating(&sample(None, false));
        assert!(!text.contains('"'));
        assert!(!text.contains('♥'));
    }

    #[test]
    fn dimension_averages_show_placeholder() {
        let line = format_dimension_averages(&[
            (Dimension::Intensity, Average::of_scores([score(5)])),
            (Dimension::Flow, None),
        ]);
        assert_eq!(line, "Intensity 5.0  Flow -");
    }

    #[test]
    fn group_row_includes_gradient_color() {
        let groups = group_by_class_type(&[sample(None, false)]);
        let row = format_group(&groups[0]);
        assert!(row.starts_with("Yoga 2"));
        assert!(row.contains(" 1 class "));
        assert!(row.contains("avg 4.0"));
        assert!(row.ends_with("rgba(63, 191, 0, 0.7)"));
    }
}
