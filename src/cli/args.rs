//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// hlcache - cached syntax highlighting
///
/// Highlights code snippets with Pygments and keeps the markup in a
/// content-addressed disk cache, so the same snippet is never highlighted twice.
#[derive(Parser, Debug)]
#[command(name = "hlcache")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "HLCACHE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Highlight a snippet, reading from a file or stdin
    Highlight(HighlightArgs),

    /// Print the cache key of a snippet
    Key(KeyArgs),

    /// Inspect the highlight cache
    Cache(CacheArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for the highlight command
#[derive(Parser, Debug)]
pub struct HighlightArgs {
    /// File to highlight (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,

    /// Language identifier passed to the highlighter
    #[arg(short, long, default_value = "")]
    pub lang: String,

    /// Wrap in plain <pre><code> markup without highlighting
    #[arg(long)]
    pub plain: bool,

    /// Wrap in plain markup when the language is not supported
    #[arg(long, conflicts_with = "plain")]
    pub fallback: bool,
}

/// Arguments for the key command
#[derive(Parser, Debug)]
pub struct KeyArgs {
    /// File to fingerprint (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,

    /// Language identifier
    #[arg(short, long, default_value = "")]
    pub lang: String,
}

/// Arguments for the cache command
#[derive(Parser, Debug)]
pub struct CacheArgs {
    /// Cache action
    #[command(subcommand)]
    pub action: CacheAction,
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// Show the cache directory
    Path,

    /// Show entry counts and sizes
    Stats {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

/// Output format for cache stats
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON
    Json,
    /// One line per language
    Plain,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Config action
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
