//! Configuration schema for hlcache
//!
//! Configuration is stored at `~/.config/hlcache/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Cache settings
    pub cache: CacheConfig,

    /// External highlighter settings
    pub highlighter: HighlighterConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Highlight cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Enable the disk cache
    pub enabled: bool,

    /// Cache directory (defaults next to the installed binary)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// File extension of cache entries
    pub extension: String,

    /// Highlighter version tag mixed into cache keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_tag: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: None,
            extension: "html".to_string(),
            version_tag: None,
        }
    }
}

/// Which highlighter backend to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlighterKind {
    /// Pygments through its command-line tool
    #[default]
    Pygments,
    /// No highlighter, code is wrapped in plain markup
    #[serde(rename = "none")]
    Plain,
}

/// External highlighter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlighterConfig {
    /// Backend to use
    pub kind: HighlighterKind,

    /// Program to run
    pub command: String,

    /// Arguments placed before the lexer flags (e.g. ["-m", "pygments"])
    pub args: Vec<String>,

    /// Pygments formatter name
    pub formatter: String,

    /// Formatter options passed with -O
    pub options: Vec<String>,
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        Self {
            kind: HighlighterKind::Pygments,
            command: "pygmentize".to_string(),
            args: vec![],
            formatter: "html".to_string(),
            options: vec!["encoding=utf-8".to_string(), "startinline=true".to_string()],
        }
    }
}
