//! hlcache - cached syntax highlighting
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use hlcache::cli::{Cli, Commands};
use hlcache::config::ConfigManager;
use hlcache::error::HlcacheResult;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Layer, Registry};

type FormatLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> HlcacheResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("hlcache=warn"),
        1 => EnvFilter::new("hlcache=info"),
        _ => EnvFilter::new("hlcache=debug"),
    };

    let (format_layer, format_handle) = reload::Layer::new(text_layer());
    tracing_subscriber::registry()
        .with(format_layer)
        .with(filter)
        .init();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };

    // Config command loads the file itself, so init --force can repair it
    if let Commands::Config(args) = cli.command {
        return hlcache::cli::commands::config(args, &config_manager).await;
    }

    let config = config_manager.load().await?;

    if config.general.log_format == "json" {
        if let Err(e) = format_handle.reload(json_layer()) {
            debug!("Failed to switch to JSON logs: {}", e);
        }
    }

    match cli.command {
        Commands::Config(_) => unreachable!("Config handled above"),
        Commands::Highlight(args) => hlcache::cli::commands::highlight(args, &config).await,
        Commands::Key(args) => hlcache::cli::commands::key(args, &config).await,
        Commands::Cache(args) => hlcache::cli::commands::cache(args, &config).await,
    }
}

fn text_layer() -> FormatLayer {
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .boxed()
}

fn json_layer() -> FormatLayer {
    fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .boxed()
}
