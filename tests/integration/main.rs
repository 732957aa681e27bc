//! Integration tests for hlcache

mod cache_tests {
    use hlcache::{build_key, DiskCache, HlcacheError};
    use tempfile::TempDir;

    fn entry_count(dir: &std::path::Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[tokio::test]
    async fn second_lookup_is_served_from_disk() {
        let temp = TempDir::new().unwrap();
        let cache = DiskCache::open(temp.path()).await;
        let key = build_key("python", "print(1)");

        let first = cache
            .get_or_compute(&key, || async {
                Ok::<_, HlcacheError>("<span>print(1)</span>".to_string())
            })
            .await
            .unwrap();
        assert_eq!(first, "<span>print(1)</span>");
        assert_eq!(entry_count(temp.path()), 1);

        let second = cache
            .get_or_compute(&key, || async {
                Ok::<_, HlcacheError>("<span>recomputed</span>".to_string())
            })
            .await
            .unwrap();
        assert_eq!(second, "<span>print(1)</span>");
        assert_eq!(entry_count(temp.path()), 1);
    }

    #[tokio::test]
    async fn entries_survive_reopening() {
        let temp = TempDir::new().unwrap();
        let key = build_key("ruby", "puts 1");

        DiskCache::open(temp.path())
            .await
            .get_or_compute(&key, || async { Ok::<_, HlcacheError>("<i>puts</i>".to_string()) })
            .await
            .unwrap();

        let reopened = DiskCache::open(temp.path()).await;
        let value = reopened
            .get_or_compute(&key, || async {
                Err::<String, _>(HlcacheError::unsupported_language("ruby"))
            })
            .await
            .unwrap();
        assert_eq!(value, "<i>puts</i>");
    }
}

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn hlcache() -> Command {
        cargo_bin_cmd!("hlcache")
    }

    /// Write a config file pointing the cache into `temp`
    fn write_config(temp: &TempDir, highlighter: &str) -> PathBuf {
        let path = temp.path().join("config.toml");
        let config = format!(
            "[cache]\ndir = '{}'\n\n{}",
            temp.path().join("cache").display(),
            highlighter
        );
        std::fs::write(&path, config).unwrap();
        path
    }

    /// Stand-in for pygmentize: wraps stdin in a span, knows no "klingon"
    #[cfg(unix)]
    fn fake_pygmentize(temp: &TempDir, tag: &str) -> PathBuf {
        let script = temp.path().join("fake-pygmentize.sh");
        let body = format!(
            "if [ \"$2\" = \"klingon\" ]; then\n\
             \techo \"Error: no lexer for alias 'klingon' found\" >&2\n\
             \texit 1\n\
             fi\n\
             printf '<{tag}>'\n\
             cat\n\
             printf '</{tag}>'\n"
        );
        std::fs::write(&script, body).unwrap();
        script
    }

    #[cfg(unix)]
    fn scripted_config(temp: &TempDir, script: &Path) -> PathBuf {
        write_config(
            temp,
            &format!(
                "[highlighter]\ncommand = 'sh'\nargs = ['{}']\n",
                script.display()
            ),
        )
    }

    fn cache_files(temp: &TempDir) -> usize {
        match std::fs::read_dir(temp.path().join("cache")) {
            Ok(entries) => entries.count(),
            Err(_) => 0,
        }
    }

    #[test]
    fn help_displays() {
        hlcache()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("cached syntax highlighting"));
    }

    #[test]
    fn version_displays() {
        hlcache()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("hlcache"));
    }

    #[test]
    fn key_prints_content_address() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp, "");

        hlcache()
            .arg("--config")
            .arg(&config)
            .args(["key", "--lang", "python"])
            .write_stdin("print(1)")
            .assert()
            .success()
            .stdout(format!("{}\n", hlcache::build_key("python", "print(1)")));
    }

    #[test]
    fn highlight_plain_wraps_verbatim() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp, "");

        hlcache()
            .arg("--config")
            .arg(&config)
            .args(["highlight", "--plain"])
            .write_stdin("a < b")
            .assert()
            .success()
            .stdout("<pre><code>a < b</code></pre>");
        assert_eq!(cache_files(&temp), 0);
    }

    #[test]
    fn highlighter_none_wraps() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp, "[highlighter]\nkind = 'none'\n");

        hlcache()
            .arg("--config")
            .arg(&config)
            .args(["highlight", "--lang", "python"])
            .write_stdin("x = 1")
            .assert()
            .success()
            .stdout("<pre><code>x = 1</code></pre>");
    }

    #[test]
    fn cache_path_from_config() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp, "");

        hlcache()
            .arg("--config")
            .arg(&config)
            .args(["cache", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                temp.path().join("cache").display().to_string(),
            ));
    }

    #[test]
    fn cache_stats_empty() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp, "");

        hlcache()
            .arg("--config")
            .arg(&config)
            .args(["cache", "stats"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No cached entries"));
        assert!(!temp.path().join("cache").exists());
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("custom.toml");

        hlcache()
            .arg("--config")
            .arg(&config)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("custom.toml"));
    }

    #[test]
    fn config_init_then_show() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("hl").join("config.toml");

        hlcache()
            .arg("--config")
            .arg(&config)
            .args(["config", "init"])
            .assert()
            .success();
        assert!(config.is_file());

        hlcache()
            .arg("--config")
            .arg(&config)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[highlighter]"));
    }

    #[test]
    fn invalid_config_fails_with_hint() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.toml");
        std::fs::write(&config, "[cache\n").unwrap();

        hlcache()
            .arg("--config")
            .arg(&config)
            .args(["cache", "path"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"))
            .stderr(predicate::str::contains("Hint:"));
    }

    #[test]
    fn config_init_force_repairs_invalid_config() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.toml");
        std::fs::write(&config, "[cache\n").unwrap();

        hlcache()
            .arg("--config")
            .arg(&config)
            .args(["config", "path"])
            .assert()
            .success();

        hlcache()
            .arg("--config")
            .arg(&config)
            .args(["config", "init", "--force"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Configuration initialized"));

        hlcache()
            .arg("--config")
            .arg(&config)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[cache]"));
    }

    #[test]
    fn debug_logs_cover_config_loading() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("missing.toml");

        hlcache()
            .arg("--config")
            .arg(&config)
            .args(["-vv", "cache", "path"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Config file not found, using defaults"));
    }

    #[cfg(unix)]
    #[test]
    fn highlight_is_cached_across_runs() {
        let temp = TempDir::new().unwrap();
        let script = fake_pygmentize(&temp, "span");
        let config = scripted_config(&temp, &script);

        hlcache()
            .arg("--config")
            .arg(&config)
            .args(["highlight", "--lang", "python"])
            .write_stdin("print(1)")
            .assert()
            .success()
            .stdout("<span>print(1)</span>");
        assert_eq!(cache_files(&temp), 1);

        // A changed highlighter must not be consulted for a cached snippet
        fake_pygmentize(&temp, "b");

        hlcache()
            .arg("--config")
            .arg(&config)
            .args(["highlight", "--lang", "python"])
            .write_stdin("print(1)")
            .assert()
            .success()
            .stdout("<span>print(1)</span>");
        assert_eq!(cache_files(&temp), 1);

        hlcache()
            .arg("--config")
            .arg(&config)
            .args(["cache", "stats", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"entries\": 1"))
            .stdout(predicate::str::contains("\"python\": 1"));
    }

    #[cfg(unix)]
    #[test]
    fn unsupported_language_fails_without_caching() {
        let temp = TempDir::new().unwrap();
        let script = fake_pygmentize(&temp, "span");
        let config = scripted_config(&temp, &script);

        hlcache()
            .arg("--config")
            .arg(&config)
            .args(["highlight", "--lang", "klingon"])
            .write_stdin("Qapla'")
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown language: klingon"))
            .stderr(predicate::str::contains("--fallback"));
        assert_eq!(cache_files(&temp), 0);

        hlcache()
            .arg("--config")
            .arg(&config)
            .args(["highlight", "--lang", "klingon", "--fallback"])
            .write_stdin("Qapla'")
            .assert()
            .success()
            .stdout("<pre><code>Qapla'</code></pre>");
        assert_eq!(cache_files(&temp), 0);
    }
}
