//! Disk-backed memoizer for highlighted markup
//!
//! Entries are whole files named by their cache key. A hit reads the file,
//! a miss runs the compute closure and writes its result through a
//! temporary file that is renamed into place.
//!
//! # Concurrency
//!
//! No lock is held between the existence check and the write. Two callers
//! missing the same key at the same time both compute and both rename their
//! result over the entry. Keys are content-addressed and compute must be
//! deterministic, so both writes carry the same bytes: at most one distinct
//! value per key, not at most one execution.

use crate::error::{HlcacheError, HlcacheResult};
use serde::Serialize;
use std::collections::BTreeMap;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Availability of the cache directory, decided once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Directory exists and is writable
    Ready,
    /// Caching switched off by configuration
    Disabled,
    /// Directory could not be created or written
    Unavailable,
}

impl std::fmt::Display for CacheState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Ready => "ready",
            Self::Disabled => "disabled",
            Self::Unavailable => "unavailable",
        };
        write!(f, "{}", s)
    }
}

/// Summary of a cache directory's contents
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of cached entries
    pub entries: usize,
    /// Total size of all entries in bytes
    pub total_bytes: u64,
    /// Entry count per language partition
    pub languages: BTreeMap<String, usize>,
}

/// Content-addressed cache of computed markup, one file per key
#[derive(Debug, Clone)]
pub struct DiskCache {
    dir: PathBuf,
    state: CacheState,
}

impl DiskCache {
    /// Open a cache rooted at `dir`, creating it if needed
    ///
    /// Never fails: if the directory cannot be created or written, the cache
    /// runs in degraded mode and every lookup computes directly.
    pub async fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let state = match Self::prepare_dir(&dir).await {
            Ok(()) => {
                debug!("Highlight cache ready at {}", dir.display());
                CacheState::Ready
            }
            Err(e) => {
                warn!(
                    "Highlight cache unavailable at {}, caching disabled: {}",
                    dir.display(),
                    e
                );
                CacheState::Unavailable
            }
        };

        Self { dir, state }
    }

    /// Create a cache that never stores anything
    pub fn disabled(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            state: CacheState::Disabled,
        }
    }

    /// Get the cache directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the recorded cache state
    pub fn state(&self) -> CacheState {
        self.state
    }

    /// Check whether lookups go through the disk
    pub fn is_enabled(&self) -> bool {
        self.state == CacheState::Ready
    }

    /// Path an entry for `key` occupies
    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Return the cached value for `key`, or compute and store it
    ///
    /// Errors from `compute` are returned unchanged and never cached.
    /// Storage failures are logged and otherwise ignored.
    pub async fn get_or_compute<F, Fut, E>(&self, key: &str, compute: F) -> Result<String, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, E>>,
    {
        if !self.is_enabled() {
            return compute().await;
        }

        if !is_valid_key(key) {
            debug!("Key {:?} is not a plain file name, bypassing cache", key);
            return compute().await;
        }

        let path = self.entry_path(key);

        match fs::read(&path).await {
            Ok(bytes) => {
                debug!("Cache hit: {}", key);
                return Ok(markup_from_bytes(bytes));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Cache miss: {}", key);
            }
            Err(e) => {
                warn!("Failed to read cache entry {}: {}", path.display(), e);
                return compute().await;
            }
        }

        let value = compute().await?;

        if let Err(e) = self.store(key, &value).await {
            warn!("Failed to write cache entry {}: {}", key, e);
        }

        Ok(value)
    }

    /// Summarize the entries currently on disk
    pub async fn stats(&self) -> HlcacheResult<CacheStats> {
        let mut stats = CacheStats::default();

        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(stats),
            Err(e) => {
                return Err(HlcacheError::io(
                    format!("reading cache directory {}", self.dir.display()),
                    e,
                ))
            }
        };

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| HlcacheError::io("reading cache entry", e))?
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_scratch_file(&name) {
                continue;
            }

            let metadata = entry
                .metadata()
                .await
                .map_err(|e| HlcacheError::io(format!("reading metadata of {}", name), e))?;
            if !metadata.is_file() {
                continue;
            }

            stats.entries += 1;
            stats.total_bytes += metadata.len();
            *stats
                .languages
                .entry(language_of(&name).to_string())
                .or_insert(0) += 1;
        }

        Ok(stats)
    }

    async fn prepare_dir(dir: &Path) -> std::io::Result<()> {
        fs::create_dir_all(dir).await?;

        // Writability check, so a read-only directory degrades up front
        let check = dir.join(format!(".probe-{}", uuid::Uuid::new_v4()));
        fs::write(&check, b"").await?;
        fs::remove_file(&check).await
    }

    async fn store(&self, key: &str, value: &str) -> std::io::Result<()> {
        let path = self.entry_path(key);
        let tmp = self
            .dir
            .join(format!(".{}.{}.tmp", key, uuid::Uuid::new_v4()));

        if let Err(e) = fs::write(&tmp, value.as_bytes()).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e);
        }

        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e);
        }

        debug!("Cached {} ({} bytes)", key, value.len());
        Ok(())
    }
}

/// A key must name a single file directly inside the cache directory
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key != "."
        && key != ".."
        && !key.contains(['/', '\\', '\0'])
}

/// Temporary writes (`.<key>.<uuid>.tmp`) and writability checks (`.probe-<uuid>`)
fn is_scratch_file(name: &str) -> bool {
    name.starts_with(".probe-") || (name.starts_with('.') && name.ends_with(".tmp"))
}

/// Stored bytes are returned as-is; invalid UTF-8 is replaced, not rejected
fn markup_from_bytes(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Language partition of an entry file name (`python-<digest>.html` -> `python`)
fn language_of(file_name: &str) -> &str {
    let stem = file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem);
    stem.rsplit_once('-').map_or("", |(language, _)| language)
}
