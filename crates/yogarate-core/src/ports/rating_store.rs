//! Rating store port definition.
//!
//! This port defines the contract between the query layer and the two
//! persisted collections, `instructors` and `ratings`.

use super::RepositoryError;
use crate::domain::{Instructor, InstructorId, NewInstructor, NewRating, Rating, RatingId};

/// Port for instructor and rating persistence.
///
/// Reads never fail: a collection that was never written, cannot be read, or
/// does not decode is reported as empty. Writes replace the whole collection
/// and only fail when the medium rejects the write.
#[cfg_attr(test, mockall::automock)]
pub trait RatingStore: Send + Sync {
    /// Seed collections that were never persisted. Existing data is left alone.
    fn initialize(&self) -> Result<(), RepositoryError>;

    /// All instructors in insertion order.
    fn list_instructors(&self) -> Vec<Instructor>;

    /// Look up one instructor by id.
    fn get_instructor(&self, id: &InstructorId) -> Option<Instructor>;

    /// Append a new instructor with a freshly assigned id.
    fn create_instructor(&self, instructor: NewInstructor) -> Result<Instructor, RepositoryError>;

    /// All ratings in insertion order.
    fn list_ratings(&self) -> Vec<Rating>;

    /// Ratings for one instructor, in insertion order.
    fn list_ratings_for_instructor(&self, instructor_id: &InstructorId) -> Vec<Rating> {
        self.list_ratings()
            .into_iter()
            .filter(|rating| &rating.instructor_id == instructor_id)
            .collect()
    }

    /// Append a new rating, assigning its id and creation time.
    fn create_rating(&self, rating: NewRating) -> Result<Rating, RepositoryError>;

    /// Flip the favorite flag of one rating.
    ///
    /// Returns `Ok(None)` without writing anything when the id is unknown.
    fn toggle_favorite(&self, rating_id: &RatingId) -> Result<Option<Rating>, RepositoryError>;
}
