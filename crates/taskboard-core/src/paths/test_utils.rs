//! Scoped environment overrides for path tests.

use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Exclusive access to the process environment for one test.
///
/// Holding a `ScopedEnv` serializes against every other path test. All
/// variables touched through it are put back, in reverse order, before the
/// lock is released.
pub struct ScopedEnv {
    saved: Vec<(&'static str, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    pub fn lock() -> Self {
        Self {
            saved: Vec::new(),
            // A failed assertion in another test must not wedge the rest.
            _lock: ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    #[allow(unsafe_code)]
    pub fn set(&mut self, key: &'static str, value: impl AsRef<OsStr>) -> &mut Self {
        self.saved.push((key, env::var_os(key)));
        // SAFETY: ENV_LOCK is held, so no other test touches the environment.
        unsafe { env::set_var(key, value) };
        self
    }

    #[allow(unsafe_code)]
    pub fn unset(&mut self, key: &'static str) -> &mut Self {
        self.saved.push((key, env::var_os(key)));
        // SAFETY: see `set`.
        unsafe { env::remove_var(key) };
        self
    }
}

impl Drop for ScopedEnv {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        for (key, previous) in self.saved.drain(..).rev() {
            // SAFETY: the lock field is dropped after this body runs.
            unsafe {
                match previous {
                    Some(value) => env::set_var(key, value),
                    None => env::remove_var(key),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "TASKBOARD_SCOPED_ENV_CHECK";

    #[test]
    fn test_restores_previous_state() {
        {
            let mut scope = ScopedEnv::lock();
            scope.unset(KEY);
            scope.set(KEY, "first").set(KEY, "second");
            assert_eq!(env::var(KEY).unwrap(), "second");
        }

        let _scope = ScopedEnv::lock();
        assert!(env::var_os(KEY).is_none());
    }
}
