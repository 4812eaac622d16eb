//! Rating statistics: averages, counts, groupings and favorites.
//!
//! Everything here is a pure function over slices handed in by the caller.
//! Nothing is cached; callers re-read the store for every view. Empty input
//! never panics: averages become `None`, counts become zero and groupings
//! become empty.

use std::collections::HashSet;
use std::fmt;

use crate::domain::{
    ClassType, Dimension, Instructor, InstructorId, RatedClass, Rating, Score, StudioLocation,
};

/// A mean score rounded to one decimal place.
///
/// Stored as whole tenths so rounding and display are exact. Rounds half
/// away from zero: a raw mean of 2.25 becomes 2.3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Average {
    tenths: u32,
}

impl Average {
    /// Mean of a non-empty sequence of scores, or `None` if it is empty.
    pub fn of_scores(scores: impl IntoIterator<Item = Score>) -> Option<Self> {
        let (sum, count) = scores
            .into_iter()
            .fold((0_u64, 0_u64), |(sum, count), score| {
                (sum + u64::from(score.get()), count + 1)
            });
        if count == 0 {
            return None;
        }
        let tenths = (20 * sum + count) / (2 * count);
        Some(Self {
            tenths: u32::try_from(tenths).unwrap_or(u32::MAX),
        })
    }

    /// Rounded value as a float, e.g. `4.3`.
    #[must_use]
    pub fn value(self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    #[must_use]
    pub const fn tenths(self) -> u32 {
        self.tenths
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

/// Mean overall rating, rounded to one decimal place.
///
/// `None` means "no ratings yet", which is different from a low score.
pub fn average_overall_rating(ratings: &[Rating]) -> Option<Average> {
    Average::of_scores(ratings.iter().map(|r| r.overall_rating))
}

/// Mean of one dimension's sub-score, rounded to one decimal place.
pub fn average_dimension(ratings: &[Rating], dimension: Dimension) -> Option<Average> {
    Average::of_scores(ratings.iter().map(|r| r.dimensions.get(dimension)))
}

/// Number of favorited ratings.
pub fn favorite_count(ratings: &[Rating]) -> usize {
    ratings.iter().filter(|r| r.is_favorite).count()
}

/// Ratings that share one value of a grouping field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingGroup<K> {
    pub key: K,
    pub count: usize,
    /// Sum of the group's overall ratings.
    pub total: u32,
    pub average_overall_rating: Average,
}

impl<K> RatingGroup<K> {
    /// Unrounded mean overall rating.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean(&self) -> f64 {
        f64::from(self.total) / self.count as f64
    }

    /// Chart color for this group, keyed to its unrounded mean overall rating.
    #[must_use]
    pub fn color(&self) -> Rgba {
        rating_color(self.mean())
    }
}

fn group_by<K, F>(ratings: &[Rating], key_of: F) -> Vec<RatingGroup<K>>
where
    K: Copy + Eq,
    F: Fn(&Rating) -> K,
{
    // (key, scores) in first-encounter order; the key sets are tiny.
    let mut buckets: Vec<(K, Vec<Score>)> = Vec::new();
    for rating in ratings {
        let key = key_of(rating);
        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, scores)) => scores.push(rating.overall_rating),
            None => buckets.push((key, vec![rating.overall_rating])),
        }
    }

    buckets
        .into_iter()
        .filter_map(|(key, scores)| {
            let count = scores.len();
            let total = scores.iter().map(|s| u32::from(s.get())).sum();
            Average::of_scores(scores).map(|average_overall_rating| RatingGroup {
                key,
                count,
                total,
                average_overall_rating,
            })
        })
        .collect()
}

/// One group per class type present, in the order first seen.
pub fn group_by_class_type(ratings: &[Rating]) -> Vec<RatingGroup<ClassType>> {
    group_by(ratings, |r| r.class_type)
}

/// One group per studio location present, in the order first seen.
pub fn group_by_studio_location(ratings: &[Rating]) -> Vec<RatingGroup<StudioLocation>> {
    group_by(ratings, |r| r.studio_location)
}

/// Instructors with at least one favorited rating, in instructor order.
pub fn favorite_instructors(instructors: &[Instructor], ratings: &[Rating]) -> Vec<Instructor> {
    let favorite_ids: HashSet<&InstructorId> = ratings
        .iter()
        .filter(|r| r.is_favorite)
        .map(|r| &r.instructor_id)
        .collect();

    instructors
        .iter()
        .filter(|i| favorite_ids.contains(&i.id))
        .cloned()
        .collect()
}

/// Most recent first. Ratings created at the same instant keep their input order.
pub fn sort_ratings_by_recency(mut ratings: Vec<Rating>) -> Vec<Rating> {
    ratings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    ratings
}

/// Pair each rating with its instructor, dropping ratings whose instructor is gone.
pub fn join_instructors(instructors: &[Instructor], ratings: Vec<Rating>) -> Vec<RatedClass> {
    ratings
        .into_iter()
        .filter_map(|rating| {
            instructors
                .iter()
                .find(|i| i.id == rating.instructor_id)
                .map(|instructor| RatedClass {
                    rating,
                    instructor: instructor.clone(),
                })
        })
        .collect()
}

/// Case-insensitive substring match on instructor names.
///
/// A blank query matches everyone.
pub fn search_instructors<'a>(instructors: &'a [Instructor], query: &str) -> Vec<&'a Instructor> {
    let needle = query.trim().to_lowercase();
    instructors
        .iter()
        .filter(|i| needle.is_empty() || i.name.to_lowercase().contains(&needle))
        .collect()
}

/// The instructor whose full name equals `query`, ignoring case and surrounding blanks.
pub fn find_by_exact_name<'a>(
    instructors: &'a [Instructor],
    query: &str,
) -> Option<&'a Instructor> {
    let wanted = query.trim().to_lowercase();
    instructors
        .iter()
        .find(|i| i.name.trim().to_lowercase() == wanted)
}

/// An RGBA color as consumed by chart renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}

/// Red (1 star) to green (5 stars) gradient color for a mean rating.
///
/// Takes the unrounded mean; rounding first shifts the color.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rating_color(mean: f64) -> Rgba {
    let t = ((mean - 1.0) / 4.0).clamp(0.0, 1.0);
    Rgba {
        r: (255.0 * (1.0 - t)).floor() as u8,
        g: (255.0 * t).floor() as u8,
        b: 0,
        alpha: 0.7,
    }
}
