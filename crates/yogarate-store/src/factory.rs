//! Composition utilities for building a `RatingStore`.
//!
//! Construction only, no domain logic. Adapters call [`open_store`] at their
//! composition root and hand the result to `RatingsService`.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;
use yogarate_core::paths::store_dir;
use yogarate_core::{CoreError, RatingStore};

use crate::media::FileKeyValueStore;
#[cfg(any(test, feature = "test-utils"))]
use crate::media::MemoryKeyValueStore;
use crate::repositories::KvRatingStore;

/// Factory for creating store instances.
pub struct StoreFactory;

impl StoreFactory {
    /// File-backed store rooted at `dir`. Nothing is seeded yet.
    pub fn file_store(dir: &Path) -> Result<KvRatingStore<FileKeyValueStore>, CoreError> {
        Ok(KvRatingStore::new(FileKeyValueStore::open(dir)?))
    }

    /// In-memory store for tests, plus a handle on its medium.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn in_memory() -> (Arc<dyn RatingStore>, MemoryKeyValueStore) {
        let kv = MemoryKeyValueStore::new();
        (Arc::new(KvRatingStore::new(kv.clone())), kv)
    }
}

/// Open and initialize the store under `data_root`.
///
/// Creates `<data_root>/store` if needed and seeds first-run defaults.
pub fn open_store(data_root: &Path) -> Result<Arc<dyn RatingStore>, CoreError> {
    let dir = store_dir(data_root)?;
    debug!(dir = %dir.display(), "Opening rating store");
    let store = StoreFactory::file_store(&dir)?;
    store.initialize()?;
    Ok(Arc::new(store))
}
