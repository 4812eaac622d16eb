//! Core domain types, ports and services for yogarate.
//!
//! yogarate records personal ratings of yoga instructors and computes the
//! statistics shown when browsing them. This crate has no storage of its
//! own: the `RatingStore` port is implemented by `yogarate-store` and
//! injected at the adapter's composition root.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    ClassType, Dimension, Dimensions, Instructor, InstructorId, NewInstructor, NewRating,
    ParseEnumError, RatedClass, Rating, RatingId, Score, ScoreError, StudioLocation,
};
pub use paths::PathError;
pub use ports::{CoreError, KeyValueStore, RatingStore, RepositoryError};
pub use services::{
    Average, InstructorChoice, InstructorProfile, InstructorSummary, RatingGroup,
    RatingSubmission, RatingsService, Rgba,
};

// Dev-dependency used only by the integration tests under tests/
#[cfg(test)]
use yogarate_store as _;
