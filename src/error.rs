//! Error types for hlcache
//!
//! All modules use `HlcacheResult<T>` as their return type. Cache storage
//! failures never show up here: the disk cache recovers from them locally.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for hlcache operations
pub type HlcacheResult<T> = Result<T, HlcacheError>;

/// All errors that can occur in hlcache
#[derive(Error, Debug)]
pub enum HlcacheError {
    // Highlighter errors
    #[error("Highlighter can't parse unknown language: {language}")]
    UnsupportedLanguage { language: String },

    #[error("Failed to run highlighter: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Highlighter command failed: {command}, stderr: {stderr}")]
    CommandExecution { command: String, stderr: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl HlcacheError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an unsupported language error
    pub fn unsupported_language(language: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            language: language.into(),
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a command execution error
    pub fn command_exec(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::CommandExecution {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Check if the highlighter rejected the language
    pub fn is_unsupported_language(&self) -> bool {
        matches!(self, Self::UnsupportedLanguage { .. })
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedLanguage { .. } => {
                Some("Pass --fallback to emit plain <pre><code> markup instead")
            }
            Self::CommandFailed { .. } => Some("Install Pygments: pip install Pygments"),
            Self::ConfigInvalid { .. } => Some("Run: hlcache config init --force"),
            _ => None,
        }
    }
}
