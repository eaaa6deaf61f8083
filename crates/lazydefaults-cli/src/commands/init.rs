use std::fs;

use anyhow::{Context, Result, bail};
use lazydefaults_config::{CONFIG_FILE_NAME, LazyDefaultsConfig};

use crate::utils::project_root;

pub fn cmd_init() -> Result<()> {
    let path = project_root()?.join(CONFIG_FILE_NAME);
    if path.exists() {
        bail!("{CONFIG_FILE_NAME} already exists");
    }

    let config = LazyDefaultsConfig::default();
    let json = serde_json::to_string_pretty(&config).context("serialize default config")?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    println!("created {}", path.display());
    Ok(())
}
