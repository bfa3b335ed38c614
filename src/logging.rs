//! File logging.
//!
//! The game owns the terminal while it runs, so log records go to a file
//! instead of stderr. Without a path no logger is installed and the `log`
//! macros in the library crates are no-ops.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Install an `env_logger` writing to `path` (appending).
///
/// The filter defaults to `info` and honors `RUST_LOG`.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;
    Ok(())
}
