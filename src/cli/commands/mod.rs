//! CLI command implementations

pub mod cache;
pub mod config;
pub mod highlight;
pub mod key;

pub use cache::execute as cache;
pub use config::execute as config;
pub use highlight::execute as highlight;
pub use key::execute as key;

use crate::error::{HlcacheError, HlcacheResult};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Read a snippet from `file`, or from stdin when it is absent or "-"
pub(crate) async fn read_input(file: Option<&Path>) -> HlcacheResult<String> {
    match file {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| HlcacheError::io(format!("reading {}", path.display()), e)),
        _ => {
            let mut code = String::new();
            tokio::io::stdin()
                .read_to_string(&mut code)
                .await
                .map_err(|e| HlcacheError::io("reading stdin", e))?;
            Ok(code)
        }
    }
}
