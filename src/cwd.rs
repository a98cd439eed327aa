//! Working-directory provider.
//!
//! [`current_dir`] asks the operating system unless a scoped override is
//! active on the calling thread. Overrides nest and are popped when their
//! guard drops, so they never outlive the scope that installed them.

use std::{cell::RefCell, env, marker::PhantomData, path::PathBuf};

use crate::error::{PathError, Result};

thread_local! {
    static OVERRIDES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

pub fn current_dir() -> Result<String> {
    if let Some(dir) = OVERRIDES.with(|overrides| overrides.borrow().last().cloned()) {
        return Ok(dir);
    }
    log::debug!("querying the process working directory");
    env::current_dir()?
        .into_os_string()
        .into_string()
        .map_err(|raw| PathError::NonUtf8CurrentDir {
            path: PathBuf::from(raw),
        })
}

/// Keeps a working-directory override alive. Dropping it restores whatever
/// was in effect before it was pushed.
#[must_use = "the override is removed as soon as the guard is dropped"]
#[derive(Debug)]
pub struct CurrentDirGuard {
    depth: usize,
    // Overrides are per thread; the guard must stay on the thread that made it.
    _local: PhantomData<*const ()>,
}

pub fn push_current_dir<S: Into<String>>(dir: S) -> CurrentDirGuard {
    let dir = dir.into();
    log::debug!("overriding current directory with {dir:?}");
    let depth = OVERRIDES.with(|overrides| {
        let mut overrides = overrides.borrow_mut();
        overrides.push(dir);
        overrides.len()
    });
    CurrentDirGuard {
        depth,
        _local: PhantomData,
    }
}

impl Drop for CurrentDirGuard {
    fn drop(&mut self) {
        let _ = OVERRIDES.try_with(|overrides| overrides.borrow_mut().truncate(self.depth - 1));
        log::debug!("current directory override at depth {} removed", self.depth);
    }
}

/// Runs `f` with `dir` as the current directory seen by this crate.
pub fn with_current_dir<S, F, R>(dir: S, f: F) -> R
where
    S: Into<String>,
    F: FnOnce() -> R,
{
    let _guard = push_current_dir(dir);
    f()
}
