//! Repository implementations over key-value media.

mod kv_rating_store;
mod seed;

pub use kv_rating_store::{INSTRUCTORS_KEY, KvRatingStore, RATINGS_KEY};
pub use seed::default_instructors;
