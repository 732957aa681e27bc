//! Key command - print the cache key of a snippet

use crate::cache::KeyBuilder;
use crate::cli::args::KeyArgs;
use crate::config::Config;
use crate::error::HlcacheResult;

/// Execute the key command
pub async fn execute(args: KeyArgs, config: &Config) -> HlcacheResult<()> {
    let code = super::read_input(args.file.as_deref()).await?;

    let keys = KeyBuilder::new()
        .with_extension(config.cache.extension.clone())
        .with_version_tag(config.cache.version_tag.clone());

    println!("{}", keys.build(&args.lang, &code));
    Ok(())
}
