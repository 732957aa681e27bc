//! Syntax highlighting front end
//!
//! Ties the external highlighter to the disk cache:
//! - `Highlighter`: the external capability
//! - `PygmentsHighlighter`: Pygments via its command-line tool
//! - `Renderer`: cached highlighting with a plain `wrap` fallback

mod factory;
mod highlighter;
mod pygments;
mod renderer;

pub use factory::create_highlighter;
pub use highlighter::{wrap, Highlighter};
pub use pygments::PygmentsHighlighter;
pub use renderer::Renderer;
