//! Core services.
//!
//! `stats` holds the pure aggregation functions; `RatingsService` composes
//! them with the `RatingStore` port for adapters.

mod ratings_service;
pub mod stats;

pub use ratings_service::{
    InstructorChoice, InstructorProfile, InstructorSummary, RatingSubmission, RatingsService,
};
pub use stats::{Average, RatingGroup, Rgba};
