//! Persistent cache for highlighted code
//!
//! Provides content-addressed caching keyed by the SHA256 of the code and
//! the language identifier. Entries are immutable once written.
//!
//! # Layout
//!
//! | Path | Contents |
//! |------|----------|
//! | `<dir>/<language>-<sha256>.html` | Highlighted markup, raw bytes |
//! | `<dir>/.<key>.<uuid>.tmp` | In-flight write, renamed into place |
//!
//! Nothing in this module deletes entries. Housekeeping is left to the user.

pub mod key;
pub mod store;

pub use key::{build_key, content_digest, KeyBuilder, DEFAULT_EXTENSION};
pub use store::{CacheState, CacheStats, DiskCache};
