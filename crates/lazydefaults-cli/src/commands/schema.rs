use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lazydefaults_config::LazyDefaultsConfig;
use lazydefaults_core::TableDef;
use schemars::{Schema, schema_for};

pub fn cmd_schema(out: PathBuf) -> Result<()> {
    if !out.exists() {
        fs::create_dir_all(&out).with_context(|| format!("create dir {}", out.display()))?;
    }

    let model_path = out.join("model.schema.json");
    let config_path = out.join("config.schema.json");

    write_schema(&model_path, &schema_for!(TableDef), "model")?;
    write_schema(&config_path, &schema_for!(LazyDefaultsConfig), "config")?;

    println!("Wrote schemas:");
    println!("  {}", model_path.display());
    println!("  {}", config_path.display());
    Ok(())
}

fn write_schema(path: &Path, schema: &Schema, label: &str) -> Result<()> {
    let text = serde_json::to_string_pretty(schema)
        .with_context(|| format!("serialize {label} schema"))?;
    fs::write(path, text).with_context(|| format!("write {}", path.display()))
}
