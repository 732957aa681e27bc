//! Highlighter abstraction
//!
//! The highlighting algorithm itself lives outside this crate. Anything
//! that turns `(code, language)` into markup can sit behind this trait.

use crate::error::HlcacheResult;
use async_trait::async_trait;

/// External syntax highlighter
///
/// Implementations must be deterministic: the same code and language must
/// always produce the same markup, since results are cached by content.
#[async_trait]
pub trait Highlighter: Send + Sync {
    /// Highlight `code` as `language`
    ///
    /// Fails with `HlcacheError::UnsupportedLanguage` when the language is
    /// not recognized. Any other error is passed through to the caller.
    async fn highlight(&self, code: &str, language: &str) -> HlcacheResult<String>;

    /// Get the human-readable highlighter name for display
    fn name(&self) -> &'static str;
}

/// Wrap code in a minimal markup envelope
///
/// The code is inserted verbatim, without escaping, and the language is
/// ignored. Used when no highlighter is configured or as a fallback.
pub fn wrap(code: &str, _language: &str) -> String {
    format!("<pre><code>{}</code></pre>", code)
}
