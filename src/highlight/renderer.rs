//! Cached highlighting
//!
//! The renderer is what document pipelines call. It derives the cache key,
//! consults the disk cache and only runs the highlighter on a miss.

use crate::cache::{DiskCache, KeyBuilder};
use crate::config::{Config, ConfigManager};
use crate::error::{HlcacheError, HlcacheResult};
use crate::highlight::{create_highlighter, wrap, Highlighter};
use tracing::{debug, warn};

/// Highlights code through a content-addressed disk cache
pub struct Renderer {
    highlighter: Option<Box<dyn Highlighter>>,
    cache: DiskCache,
    keys: KeyBuilder,
}

impl Renderer {
    /// Create a renderer from its parts
    ///
    /// Without a highlighter every snippet is wrapped in plain markup.
    pub fn new(
        highlighter: Option<Box<dyn Highlighter>>,
        cache: DiskCache,
        keys: KeyBuilder,
    ) -> Self {
        Self {
            highlighter,
            cache,
            keys,
        }
    }

    /// Create a renderer from configuration, opening the cache directory
    pub async fn from_config(config: &Config) -> Self {
        let dir = ConfigManager::cache_dir(config);
        let cache = if config.cache.enabled {
            DiskCache::open(dir).await
        } else {
            debug!("Highlight cache disabled by configuration");
            DiskCache::disabled(dir)
        };

        let keys = KeyBuilder::new()
            .with_extension(config.cache.extension.clone())
            .with_version_tag(config.cache.version_tag.clone());

        Self::new(create_highlighter(&config.highlighter), cache, keys)
    }

    /// Get the underlying cache
    pub fn cache(&self) -> &DiskCache {
        &self.cache
    }

    /// Get the key builder
    pub fn keys(&self) -> &KeyBuilder {
        &self.keys
    }

    /// Check if a highlighter is configured
    pub fn has_highlighter(&self) -> bool {
        self.highlighter.is_some()
    }

    /// Highlight `code` as `language`, using the cache when possible
    ///
    /// Unsupported languages are reported as `HlcacheError::UnsupportedLanguage`
    /// and never cached.
    pub async fn highlight(&self, code: &str, language: &str) -> HlcacheResult<String> {
        let Some(highlighter) = self.highlighter.as_deref() else {
            return Ok(wrap(code, language));
        };

        let key = self.keys.build(language, code);
        self.cache
            .get_or_compute(&key, || highlighter.highlight(code, language))
            .await
    }

    /// Highlight `code`, falling back to plain markup for unknown languages
    pub async fn highlight_or_wrap(&self, code: &str, language: &str) -> HlcacheResult<String> {
        match self.highlight(code, language).await {
            Err(HlcacheError::UnsupportedLanguage { language }) => {
                warn!("No lexer for '{}', using plain markup", language);
                Ok(wrap(code, &language))
            }
            other => other,
        }
    }
}
