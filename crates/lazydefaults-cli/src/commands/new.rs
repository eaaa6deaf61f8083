use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use lazydefaults_config::FileFormat;
use lazydefaults_core::TableDef;

use crate::utils::{load_config, project_root};

pub fn cmd_new(name: String, format: Option<FileFormat>) -> Result<()> {
    let config = load_config()?;
    let format = format.unwrap_or(config.model_format);
    let dir = project_root()?.join(config.models_dir());
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("create models directory: {}", dir.display()))?;
    }

    let path = dir.join(format!("{name}.{}", format.extension()));
    if path.exists() {
        bail!("model file already exists: {}", path.display());
    }

    let table = TableDef::new(name);
    match format {
        FileFormat::Json => write_json(&path, &table)?,
        FileFormat::Yaml | FileFormat::Yml => write_yaml(&path, &table)?,
    }

    println!("Created model template: {}", path.display());
    Ok(())
}

fn write_json(path: &Path, table: &TableDef) -> Result<()> {
    let text = serde_json::to_string_pretty(table).context("serialize table to json")?;
    fs::write(path, text).with_context(|| format!("write file: {}", path.display()))
}

fn write_yaml(path: &Path, table: &TableDef) -> Result<()> {
    let text = serde_yaml::to_string(table).context("serialize table to yaml")?;
    fs::write(path, text).with_context(|| format!("write file: {}", path.display()))
}
