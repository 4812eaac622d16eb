//! Key-value medium port.
//!
//! The local medium the collections live in: a flat namespace of string keys
//! holding serialized JSON. Implementations decide where the bytes go.

use super::RepositoryError;

/// A durable string-to-string store scoped to one local profile.
///
/// # Design Rules
///
/// - Values are opaque strings; callers own the encoding
/// - `get` distinguishes "never written" (`Ok(None)`) from a medium failure
/// - `set` replaces the whole value in one step
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if it was ever written.
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;

    /// Forget `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), RepositoryError>;
}
