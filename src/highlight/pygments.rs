//! Pygments highlighter
//!
//! Drives the `pygmentize` command-line tool: code goes in on stdin,
//! markup comes out on stdout.

use crate::config::HighlighterConfig;
use crate::error::{HlcacheError, HlcacheResult};
use crate::highlight::Highlighter;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Highlighter backed by the Pygments command-line tool
#[derive(Debug, Clone)]
pub struct PygmentsHighlighter {
    command: String,
    args: Vec<String>,
    formatter: String,
    options: Vec<String>,
}

impl PygmentsHighlighter {
    /// Create a Pygments highlighter from configuration
    pub fn new(config: &HighlighterConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            formatter: config.formatter.clone(),
            options: config.options.clone(),
        }
    }

    /// Full argument list for highlighting `language`
    fn command_args(&self, language: &str) -> Vec<String> {
        let mut args = self.args.clone();
        args.push("-l".to_string());
        args.push(language.to_string());
        args.push("-f".to_string());
        args.push(self.formatter.clone());
        if !self.options.is_empty() {
            args.push("-O".to_string());
            args.push(self.options.join(","));
        }
        args
    }

    fn display_command(&self, args: &[String]) -> String {
        format!("{} {}", self.command, args.join(" "))
    }
}

#[async_trait]
impl Highlighter for PygmentsHighlighter {
    async fn highlight(&self, code: &str, language: &str) -> HlcacheResult<String> {
        let args = self.command_args(language);
        let cmdline = self.display_command(&args);
        debug!("Executing: {}", cmdline);

        let mut child = Command::new(&self.command)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| HlcacheError::command_failed(cmdline.clone(), e))?;

        // Feed stdin concurrently so large inputs can't deadlock on a full pipe
        let stdin = child.stdin.take();
        let input = code.as_bytes().to_vec();
        let writer = tokio::spawn(async move {
            if let Some(mut stdin) = stdin {
                stdin.write_all(&input).await?;
                stdin.shutdown().await?;
            }
            Ok::<_, std::io::Error>(())
        });

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| HlcacheError::command_failed(cmdline.clone(), e))?;

        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            if is_unknown_lexer(&stderr) {
                return Err(HlcacheError::unsupported_language(language));
            }
            return Err(HlcacheError::command_exec(cmdline, stderr.trim()));
        }

        // A closed pipe after a successful exit only means the tool stopped reading
        if let Ok(Err(e)) = writer.await {
            debug!("Highlighter stdin closed early: {}", e);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn name(&self) -> &'static str {
        "pygments"
    }
}

/// Pygments reports unknown lexers as `Error: no lexer for alias 'x' found`
fn is_unknown_lexer(stderr: &str) -> bool {
    stderr.to_lowercase().contains("no lexer")
}
