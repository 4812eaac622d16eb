//! Environment isolation for tests that touch `YOGARATE_DATA_DIR`.

use std::env;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::data::DATA_DIR_ENV;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Holds the env lock and restores `YOGARATE_DATA_DIR` when dropped.
pub struct DataDirEnv {
    previous: Option<String>,
    _lock: MutexGuard<'static, ()>,
}

impl DataDirEnv {
    /// Lock the environment, then set the variable (or clear it for `None`).
    #[allow(unsafe_code)]
    pub fn set(value: Option<&str>) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = env::var(DATA_DIR_ENV).ok();
        // SAFETY: ENV_LOCK serializes every test that reads or writes the variable.
        unsafe { apply(value) };
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for DataDirEnv {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: the lock is still held; fields drop after this body.
        unsafe { apply(self.previous.as_deref()) };
    }
}

#[allow(unsafe_code)]
unsafe fn apply(value: Option<&str>) {
    unsafe {
        match value {
            Some(v) => env::set_var(DATA_DIR_ENV, v),
            None => env::remove_var(DATA_DIR_ENV),
        }
    }
}
