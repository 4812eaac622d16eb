//! Domain types for instructors and ratings.
//!
//! These are pure data types with no infrastructure concerns. Serialization
//! attributes describe the persisted JSON layout.

mod catalog;
mod instructor;
mod rating;
mod score;

pub use catalog::{ClassType, ParseEnumError, StudioLocation};
pub use instructor::{Instructor, InstructorId, NewInstructor};
pub use rating::{NewRating, RatedClass, Rating, RatingId};
pub use score::{Dimension, Dimensions, Score, ScoreError};
