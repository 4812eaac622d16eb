//! Ratings service - the query and submission facade used by adapters.
//!
//! This service composes the `RatingStore` port with the pure functions in
//! [`stats`](super::stats). It re-reads the store on every call and keeps no
//! state of its own.

use std::sync::Arc;

use tracing::{debug, info};

use super::stats::{
    self, Average, RatingGroup, average_dimension, average_overall_rating, favorite_count,
    group_by_class_type, group_by_studio_location, sort_ratings_by_recency,
};
use crate::domain::{
    ClassType, Dimension, Dimensions, Instructor, InstructorId, NewInstructor, NewRating,
    RatedClass, Rating, RatingId, Score, StudioLocation,
};
use crate::ports::{CoreError, RatingStore};

/// An instructor with headline numbers, as shown in instructor lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructorSummary {
    pub instructor: Instructor,
    pub rating_count: usize,
    pub average: Option<Average>,
    pub favorite_count: usize,
}

impl InstructorSummary {
    fn build(instructor: Instructor, ratings: &[Rating]) -> Self {
        Self {
            instructor,
            rating_count: ratings.len(),
            average: average_overall_rating(ratings),
            favorite_count: favorite_count(ratings),
        }
    }
}

/// Everything the instructor detail view needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructorProfile {
    pub instructor: Instructor,
    /// Most recent first.
    pub ratings: Vec<Rating>,
    pub average: Option<Average>,
    /// One entry per dimension, in [`Dimension::ALL`] order.
    pub dimension_averages: Vec<(Dimension, Option<Average>)>,
    pub by_class_type: Vec<RatingGroup<ClassType>>,
    pub by_studio_location: Vec<RatingGroup<StudioLocation>>,
}

/// Which instructor a submitted rating is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstructorChoice {
    /// An instructor picked from the list.
    Existing(InstructorId),
    /// A name typed in when no existing instructor matched.
    New(String),
}

/// A filled-in rating form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingSubmission {
    pub instructor: Option<InstructorChoice>,
    pub class_type: ClassType,
    pub studio_location: StudioLocation,
    pub overall_rating: Score,
    pub dimensions: Dimensions,
    pub notes: Option<String>,
    pub is_favorite: bool,
}

impl Default for RatingSubmission {
    fn default() -> Self {
        Self {
            instructor: None,
            class_type: ClassType::default(),
            studio_location: StudioLocation::default(),
            overall_rating: Score::DEFAULT,
            dimensions: Dimensions::default(),
            notes: None,
            is_favorite: false,
        }
    }
}

/// Service for browsing and recording ratings.
///
/// This is a thin orchestration layer over the `RatingStore` port. The store
/// never validates input, so the checks a rating form would make live here.
pub struct RatingsService {
    store: Arc<dyn RatingStore>,
}

impl RatingsService {
    /// Create a new ratings service.
    pub fn new(store: Arc<dyn RatingStore>) -> Self {
        Self { store }
    }

    /// Seed the store on first run. Safe to call on every start.
    pub fn initialize(&self) -> Result<(), CoreError> {
        self.store.initialize()?;
        Ok(())
    }

    /// Instructors in storage order, optionally narrowed by a name search.
    pub fn instructors(&self, query: Option<&str>) -> Vec<InstructorSummary> {
        let instructors = self.store.list_instructors();
        let ratings = self.store.list_ratings();
        stats::search_instructors(&instructors, query.unwrap_or_default())
            .into_iter()
            .map(|instructor| {
                let own: Vec<Rating> = ratings
                    .iter()
                    .filter(|r| r.instructor_id == instructor.id)
                    .cloned()
                    .collect();
                InstructorSummary::build(instructor.clone(), &own)
            })
            .collect()
    }

    /// Detail view for one instructor, or `None` if the id is unknown.
    pub fn instructor_profile(&self, id: &InstructorId) -> Option<InstructorProfile> {
        let instructor = self.store.get_instructor(id)?;
        let ratings = self.store.list_ratings_for_instructor(id);

        let dimension_averages = Dimension::ALL
            .into_iter()
            .map(|d| (d, average_dimension(&ratings, d)))
            .collect();

        Some(InstructorProfile {
            instructor,
            average: average_overall_rating(&ratings),
            dimension_averages,
            by_class_type: group_by_class_type(&ratings),
            by_studio_location: group_by_studio_location(&ratings),
            ratings: sort_ratings_by_recency(ratings),
        })
    }

    /// Every rating with its instructor, most recent first.
    ///
    /// Ratings that point at a missing instructor are left out.
    pub fn history(&self) -> Vec<RatedClass> {
        let instructors = self.store.list_instructors();
        let ratings = sort_ratings_by_recency(self.store.list_ratings());
        stats::join_instructors(&instructors, ratings)
    }

    /// Instructors with at least one favorited rating.
    pub fn favorites(&self) -> Vec<InstructorSummary> {
        let instructors = self.store.list_instructors();
        let ratings = self.store.list_ratings();
        stats::favorite_instructors(&instructors, &ratings)
            .into_iter()
            .map(|instructor| {
                let own: Vec<Rating> = ratings
                    .iter()
                    .filter(|r| r.instructor_id == instructor.id)
                    .cloned()
                    .collect();
                InstructorSummary::build(instructor, &own)
            })
            .collect()
    }

    /// Existing instructor with exactly this name, ignoring case.
    ///
    /// Lets a typed-in name resolve to the instructor it already names
    /// instead of creating a duplicate.
    pub fn find_instructor_by_name(&self, name: &str) -> Option<Instructor> {
        let instructors = self.store.list_instructors();
        stats::find_by_exact_name(&instructors, name).cloned()
    }

    /// Add an instructor by name.
    pub fn add_instructor(&self, name: &str) -> Result<Instructor, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation(
                "Please enter an instructor name".to_string(),
            ));
        }
        let instructor = self.store.create_instructor(NewInstructor::new(name))?;
        info!(id = %instructor.id, name = %instructor.name, "Added instructor");
        Ok(instructor)
    }

    /// Validate and record a rating, creating the instructor first if needed.
    ///
    /// The two writes are independent. If the rating write fails after a new
    /// instructor was created, the instructor stays.
    pub fn submit_rating(&self, submission: RatingSubmission) -> Result<Rating, CoreError> {
        let instructor_id = match submission.instructor {
            None => {
                return Err(CoreError::Validation(
                    "Please select an instructor".to_string(),
                ));
            }
            Some(InstructorChoice::Existing(id)) => {
                if id.as_str().trim().is_empty() {
                    return Err(CoreError::Validation(
                        "Please select an instructor".to_string(),
                    ));
                }
                id
            }
            Some(InstructorChoice::New(name)) => self.add_instructor(&name)?.id,
        };

        let notes = submission
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let rating = self.store.create_rating(NewRating {
            instructor_id,
            class_type: submission.class_type,
            studio_location: submission.studio_location,
            overall_rating: submission.overall_rating,
            dimensions: submission.dimensions,
            notes,
            is_favorite: submission.is_favorite,
        })?;
        debug!(id = %rating.id, instructor = %rating.instructor_id, "Recorded rating");
        Ok(rating)
    }

    /// Flip a rating's favorite flag. Unknown ids are a no-op returning `None`.
    pub fn toggle_favorite(&self, id: &RatingId) -> Result<Option<Rating>, CoreError> {
        let updated = self.store.toggle_favorite(id)?;
        if updated.is_none() {
            debug!(id = %id, "Favorite toggle ignored for unknown rating");
        }
        Ok(updated)
    }
}
