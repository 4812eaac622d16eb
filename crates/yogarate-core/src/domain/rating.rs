//! Rating domain types.
//!
//! A rating is one recorded evaluation of a class session. Field names are
//! persisted in camelCase (`instructorId`, `isFavorite`, ...).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{ClassType, StudioLocation};
use super::instructor::{Instructor, InstructorId};
use super::score::{Dimensions, Score};

/// Opaque rating identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingId(String);

impl RatingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RatingId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RatingId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for RatingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted rating.
///
/// `instructor_id` is not checked against the instructor collection; queries
/// must tolerate ratings whose instructor is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: RatingId,
    pub instructor_id: InstructorId,
    pub class_type: ClassType,
    pub studio_location: StudioLocation,
    pub created_at: DateTime<Utc>,
    pub overall_rating: Score,
    pub dimensions: Dimensions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Data for creating a new rating. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRating {
    pub instructor_id: InstructorId,
    pub class_type: ClassType,
    pub studio_location: StudioLocation,
    pub overall_rating: Score,
    pub dimensions: Dimensions,
    pub notes: Option<String>,
    pub is_favorite: bool,
}

impl NewRating {
    /// Complete the record with the identity assigned by the store.
    #[must_use]
    pub fn into_rating(self, id: RatingId, created_at: DateTime<Utc>) -> Rating {
        Rating {
            id,
            instructor_id: self.instructor_id,
            class_type: self.class_type,
            studio_location: self.studio_location,
            created_at,
            overall_rating: self.overall_rating,
            dimensions: self.dimensions,
            notes: self.notes,
            is_favorite: self.is_favorite,
        }
    }
}

/// A rating joined with the instructor it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatedClass {
    pub rating: Rating,
    pub instructor: Instructor,
}
