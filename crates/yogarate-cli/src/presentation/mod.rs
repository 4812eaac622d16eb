//! Shared CLI presentation utilities.
//!
//! Reusable display and formatting functions for consistent CLI output
//! across commands.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Averages, groupings and sorting come from core services

pub mod rating_display;
pub mod tables;

// Re-export commonly used items
pub use rating_display::{
    display_instructor_table, format_average, format_date, format_dimension_averages,
    format_group, format_rating, stars,
};
pub use tables::{format_optional, print_separator, truncate_string};
