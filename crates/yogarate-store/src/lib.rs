//! Storage adapters for yogarate.
//!
//! - [`media`]: key-value media (one JSON file per key, or in memory)
//! - [`repositories`]: `RatingStore` over any medium
//! - [`factory`]: wiring helpers for composition roots

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod factory;
pub mod media;
pub mod repositories;

pub use factory::{StoreFactory, open_store};
pub use media::{FileKeyValueStore, MemoryKeyValueStore};
pub use repositories::{INSTRUCTORS_KEY, KvRatingStore, RATINGS_KEY, default_instructors};
