//! Ownership of a written entry file.

use std::path::{Path, PathBuf};

use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Owns the entry file written by `init` and deletes it on drop.
///
/// Deletion is best effort: the owning process is going away, so a failure
/// is logged and otherwise ignored.
#[derive(Debug)]
pub struct EntryLease {
    path: PathBuf,
    armed: bool,
    released: CancellationToken,
}

impl EntryLease {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            armed: true,
            released: CancellationToken::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cancelled once this lease is gone, whichever way it went.
    #[must_use]
    pub fn released(&self) -> CancellationToken {
        self.released.clone()
    }

    /// Drops the lease without deleting the file.
    ///
    /// Used when a newer lease has taken over the same path.
    pub fn disarm(mut self) {
        self.armed = false;
    }

    /// Deletes the file now.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for EntryLease {
    fn drop(&mut self) {
        if self.armed {
            // Synchronous unlink: the file must be gone when `release()` or
            // drop returns, even on a runtime worker (the shutdown watcher).
            match std::fs::remove_file(&self.path) {
                Ok(()) => debug!(path = %self.path.display(), "Removed entry file"),
                Err(e) => debug!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove entry file"
                ),
            }
        }
        self.released.cancel();
    }
}
