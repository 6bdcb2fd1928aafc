//! Disk cache for journey-planner responses.
//!
//! One file per stop place, holding the verbatim last successful response
//! body. Validity is judged from the file's modification time against a
//! fixed TTL; stale files are simply ignored, never deleted. Concurrent
//! writers may race, but the worst outcome is a torn file whose next read
//! misses and re-fetches, so no locking is used.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Error writing a cache entry.
///
/// Read-side failures never surface as errors; an unreadable or stale
/// entry is just a miss.
#[derive(Debug, thiserror::Error)]
#[error("cache error: {message}")]
pub struct CacheError {
    message: String,
}

/// File-system-backed response cache keyed by stop place id.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    dir: PathBuf,
    ttl: Duration,
}

impl ResponseCache {
    /// Create a cache rooted at `dir` with the given TTL. The directory
    /// is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl,
        }
    }

    /// The file backing a given stop place id.
    ///
    /// Ids contain only `':'` and alphanumerics in practice, but the key
    /// is sanitized defensively: every byte outside `[A-Za-z0-9._-]`
    /// becomes `'-'`, keeping the mapping deterministic and the name safe
    /// on any filesystem.
    pub fn path_for(&self, station_id: &str) -> PathBuf {
        let safe: String = station_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }

    /// Load the cached response for a stop place.
    ///
    /// Returns `None` if the entry doesn't exist, can't be read, or is
    /// older than the TTL.
    pub fn load(&self, station_id: &str) -> Option<String> {
        let path = self.path_for(station_id);
        let modified = std::fs::metadata(&path).ok()?.modified().ok()?;
        // A file dated in the future (clock skew) counts as age zero.
        let age = std::time::SystemTime::now()
            .duration_since(modified)
            .unwrap_or_default();
        if age >= self.ttl {
            return None;
        }
        std::fs::read_to_string(&path).ok()
    }

    /// Persist a raw response body for a stop place, creating the cache
    /// directory if needed.
    pub fn store(&self, station_id: &str, body: &str) -> Result<(), CacheError> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(|e| CacheError {
                message: format!("failed to create cache directory: {e}"),
            })?;
        }
        std::fs::write(self.path_for(station_id), body).map_err(|e| CacheError {
            message: format!("failed to write cache file: {e}"),
        })
    }

    /// The cache directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The cache TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
