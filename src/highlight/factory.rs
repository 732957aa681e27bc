//! Highlighter factory
//!
//! Builds the configured highlighter backend.

use crate::config::{HighlighterConfig, HighlighterKind};
use crate::highlight::pygments::PygmentsHighlighter;
use crate::highlight::Highlighter;

/// Create the highlighter selected by configuration
///
/// # Returns
/// * `Some(Box<dyn Highlighter>)` - A boxed highlighter implementation
/// * `None` - If highlighting is turned off and code should be wrapped plainly
pub fn create_highlighter(config: &HighlighterConfig) -> Option<Box<dyn Highlighter>> {
    match config.kind {
        HighlighterKind::Pygments => Some(Box::new(PygmentsHighlighter::new(config))),
        HighlighterKind::Plain => None,
    }
}
