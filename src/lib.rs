//! hlcache - cached syntax highlighting
//!
//! Keeps highlighted markup in a content-addressed disk cache in front of
//! an external highlighter, so the same snippet is never highlighted twice.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod highlight;

pub use cache::{build_key, DiskCache, KeyBuilder};
pub use error::{HlcacheError, HlcacheResult};
pub use highlight::{wrap, Highlighter, Renderer};
