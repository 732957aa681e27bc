//! Cache command - inspect the highlight cache

use crate::cache::{CacheStats, DiskCache};
use crate::cli::args::{CacheAction, CacheArgs, OutputFormat};
use crate::config::{Config, ConfigManager};
use crate::error::HlcacheResult;
use console::style;
use std::path::Path;

/// Execute the cache command
pub async fn execute(args: CacheArgs, config: &Config) -> HlcacheResult<()> {
    let dir = ConfigManager::cache_dir(config);

    match args.action {
        CacheAction::Path => println!("{}", dir.display()),
        CacheAction::Stats { format } => {
            // Reporting must not create the directory
            let stats = DiskCache::disabled(&dir).stats().await?;
            match format {
                OutputFormat::Table => print_stats_table(&dir, &stats),
                OutputFormat::Json => print_stats_json(&dir, &stats)?,
                OutputFormat::Plain => print_stats_plain(&stats),
            }
        }
    }

    Ok(())
}

fn print_stats_table(dir: &Path, stats: &CacheStats) {
    println!("Cache: {}", style(dir.display()).cyan());
    println!();

    if stats.entries == 0 {
        println!("No cached entries.");
        return;
    }

    println!("{:<24} {:>10}", "LANGUAGE", "ENTRIES");
    println!("{}", "-".repeat(35));
    for (language, count) in &stats.languages {
        let name = if language.is_empty() {
            style("(none)").dim().to_string()
        } else {
            language.clone()
        };
        println!("{:<24} {:>10}", name, count);
    }

    println!();
    println!(
        "Total: {} entr{} ({})",
        stats.entries,
        if stats.entries == 1 { "y" } else { "ies" },
        format_bytes(stats.total_bytes)
    );
}

fn print_stats_json(dir: &Path, stats: &CacheStats) -> HlcacheResult<()> {
    #[derive(serde::Serialize)]
    struct StatsJson<'a> {
        dir: String,
        #[serde(flatten)]
        stats: &'a CacheStats,
    }

    let json = StatsJson {
        dir: dir.display().to_string(),
        stats,
    };
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn print_stats_plain(stats: &CacheStats) {
    for (language, count) in &stats.languages {
        println!("{}\t{}", language, count);
    }
}

fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;

    if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_bytes_units() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KiB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MiB");
    }
}
