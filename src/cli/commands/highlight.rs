//! Highlight command - render a snippet through the cache

use crate::cli::args::HighlightArgs;
use crate::config::Config;
use crate::error::{HlcacheError, HlcacheResult};
use crate::highlight::{wrap, Renderer};
use std::io::{self, Write};
use tracing::debug;

/// Execute the highlight command
pub async fn execute(args: HighlightArgs, config: &Config) -> HlcacheResult<()> {
    let code = super::read_input(args.file.as_deref()).await?;

    let html = if args.plain {
        wrap(&code, &args.lang)
    } else {
        let renderer = Renderer::from_config(config).await;
        debug!(
            "Rendering with cache {} ({})",
            renderer.cache().dir().display(),
            renderer.cache().state()
        );

        if args.fallback {
            renderer.highlight_or_wrap(&code, &args.lang).await?
        } else {
            renderer.highlight(&code, &args.lang).await?
        }
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(html.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| HlcacheError::io("writing markup to stdout", e))
}
