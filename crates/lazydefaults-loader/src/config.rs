use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lazydefaults_config::{CONFIG_FILE_NAME, LazyDefaultsConfig};

/// Load config from a specific path.
pub fn load_config_from_path(path: PathBuf) -> Result<LazyDefaultsConfig> {
    if !path.exists() {
        anyhow::bail!("{CONFIG_FILE_NAME} not found at: {}", path.display());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let config: LazyDefaultsConfig = serde_json::from_str(&content)
        .with_context(|| format!("parse config: {}", path.display()))?;
    Ok(config)
}

/// Load lazydefaults.json from the project root, falling back to defaults
/// when the file is absent.
pub fn load_config(root: &Path) -> Result<LazyDefaultsConfig> {
    let path = root.join(CONFIG_FILE_NAME);
    if path.exists() {
        load_config_from_path(path)
    } else {
        tracing::debug!(root = %root.display(), "no config file, using defaults");
        Ok(LazyDefaultsConfig::default())
    }
}
