//! Utility functions for PromiseGen

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

/// Config file names looked up in the working directory, in order
pub const DEFAULT_CONFIG_FILES: [&str; 4] = [
    ".promise-gen.yaml",
    ".promise-gen.yml",
    "promise-gen.yaml",
    "promise-gen.yml",
];

/// Get the XDG config directory for PromiseGen
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow!("Could not determine config directory"))?
        .join("promise-gen");

    Ok(config_dir)
}

/// Expand `~` and environment variables in a user supplied path.
///
/// Variables that are not set are kept literally, so paths containing `$`
/// still resolve.
pub fn expand_path(path: &str) -> PathBuf {
    let expanded = shellexpand::full_with_context_no_errors(
        path,
        || dirs::home_dir().map(|home| home.to_string_lossy().into_owned()),
        |var| std::env::var(var).ok(),
    );
    PathBuf::from(expanded.as_ref())
}

/// Find the first existing default config file below `dir`
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}
