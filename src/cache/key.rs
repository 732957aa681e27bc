//! Cache key derivation for highlighted snippets
//!
//! Keys have the form `<language>-<sha256 hex>.<ext>`. Same code and same
//! language = same key, so entries never need to be invalidated.

use sha2::{Digest, Sha256};

/// Extension of stored markup entries
pub const DEFAULT_EXTENSION: &str = "html";

/// Builds cache keys for `(language, code)` pairs
///
/// The language identifier is used verbatim: `"Python"` and `"python"`
/// are separate cache partitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBuilder {
    extension: String,
    version_tag: Option<String>,
}

impl KeyBuilder {
    /// Create a key builder with the default `html` extension and no version tag
    pub fn new() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            version_tag: None,
        }
    }

    /// Use a different file extension for entries
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Namespace keys by a highlighter version tag
    ///
    /// The tag is mixed into the digest, so the file name layout stays
    /// `<language>-<digest>.<ext>`. Empty tags are ignored.
    pub fn with_version_tag(mut self, tag: Option<String>) -> Self {
        self.version_tag = tag.filter(|t| !t.is_empty());
        self
    }

    /// Get the configured extension
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Get the configured version tag
    pub fn version_tag(&self) -> Option<&str> {
        self.version_tag.as_deref()
    }

    /// Derive the cache key for a snippet
    pub fn build(&self, language: &str, code: &str) -> String {
        let digest = match &self.version_tag {
            Some(tag) => {
                let mut hasher = Sha256::new();
                hasher.update(tag.as_bytes());
                hasher.update([0u8]);
                hasher.update(code.as_bytes());
                hex::encode(hasher.finalize())
            }
            None => content_digest(code),
        };
        format!("{}-{}.{}", language, digest, self.extension)
    }
}

impl Default for KeyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// SHA256 of the code, lowercase hex (64 chars)
pub fn content_digest(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    hex::encode(hasher.finalize())
}

/// Derive the cache key for a snippet with the default key builder
pub fn build_key(language: &str, code: &str) -> String {
    KeyBuilder::new().build(language, code)
}
