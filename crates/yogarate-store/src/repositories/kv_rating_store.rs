//! `RatingStore` implementation over any `KeyValueStore` medium.

use chrono::{SubsecRound, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use yogarate_core::{
    Instructor, InstructorId, KeyValueStore, NewInstructor, NewRating, Rating, RatingId,
    RatingStore, RepositoryError,
};

use super::seed::default_instructors;

/// Key of the persisted instructor collection.
pub const INSTRUCTORS_KEY: &str = "instructors";

/// Key of the persisted rating collection.
pub const RATINGS_KEY: &str = "ratings";

/// Stores each collection as one JSON array under a fixed key.
///
/// Every write reads the whole collection, changes it in memory and writes
/// it back. Two writers racing on the same medium lose one update.
#[derive(Debug, Clone)]
pub struct KvRatingStore<K> {
    kv: K,
}

impl<K: KeyValueStore> KvRatingStore<K> {
    /// Create a store over `kv`. Call [`RatingStore::initialize`] before use.
    pub const fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Read a collection record by record.
    ///
    /// A medium failure or a value that is not a JSON array reads as empty.
    /// Inside an array, records that do not decode are skipped so the rest
    /// stay visible and survive the next write.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.kv.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key, error = %e, "Collection unreadable, treating as empty");
                return Vec::new();
            }
        };

        let records: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(key, error = %e, "Collection corrupted, treating as empty");
                return Vec::new();
            }
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(key, index, error = %e, "Skipping undecodable record");
                    None
                }
            })
            .collect()
    }

    fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), RepositoryError> {
        let json = serde_json::to_string(items)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        self.kv.set(key, &json)?;
        debug!(key, count = items.len(), "Persisted collection");
        Ok(())
    }

    /// Seed `key` with `items` only if it was never written.
    fn seed<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), RepositoryError> {
        match self.kv.get(key) {
            Ok(None) => {
                self.save(key, items)?;
                info!(key, count = items.len(), "Seeded collection");
                Ok(())
            }
            Ok(Some(_)) => Ok(()),
            Err(e) => {
                warn!(key, error = %e, "Cannot check collection, leaving it unseeded");
                Ok(())
            }
        }
    }
}

/// Fresh time-ordered identifier.
fn next_id() -> String {
    Uuid::now_v7().to_string()
}

impl<K: KeyValueStore> RatingStore for KvRatingStore<K> {
    fn initialize(&self) -> Result<(), RepositoryError> {
        self.seed(INSTRUCTORS_KEY, &default_instructors())?;
        self.seed::<Rating>(RATINGS_KEY, &[])
    }

    fn list_instructors(&self) -> Vec<Instructor> {
        self.load(INSTRUCTORS_KEY)
    }

    fn get_instructor(&self, id: &InstructorId) -> Option<Instructor> {
        self.list_instructors().into_iter().find(|i| &i.id == id)
    }

    fn create_instructor(&self, instructor: NewInstructor) -> Result<Instructor, RepositoryError> {
        let mut instructors = self.list_instructors();
        let created = Instructor {
            id: InstructorId::new(next_id()),
            name: instructor.name,
        };
        instructors.push(created.clone());
        self.save(INSTRUCTORS_KEY, &instructors)?;
        Ok(created)
    }

    fn list_ratings(&self) -> Vec<Rating> {
        self.load(RATINGS_KEY)
    }

    fn create_rating(&self, rating: NewRating) -> Result<Rating, RepositoryError> {
        let mut ratings = self.list_ratings();
        // Millisecond precision, matching the ISO-8601 strings already on disk.
        let created = rating.into_rating(RatingId::new(next_id()), Utc::now().trunc_subsecs(3));
        ratings.push(created.clone());
        self.save(RATINGS_KEY, &ratings)?;
        Ok(created)
    }

    fn toggle_favorite(&self, rating_id: &RatingId) -> Result<Option<Rating>, RepositoryError> {
        let mut ratings = self.list_ratings();
        let Some(rating) = ratings.iter_mut().find(|r| &r.id == rating_id) else {
            return Ok(None);
        };
        rating.is_favorite = !rating.is_favorite;
        let updated = rating.clone();
        self.save(RATINGS_KEY, &ratings)?;
        Ok(Some(updated))
    }
}
