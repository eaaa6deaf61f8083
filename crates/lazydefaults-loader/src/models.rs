use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lazydefaults_config::LazyDefaultsConfig;
use lazydefaults_configurator::{ModelRegistry, validate_schema};
use lazydefaults_core::TableDef;

/// Load all model definitions under `root/<models_dir>` (recursively).
///
/// Files are read in path order so the result is stable across platforms.
/// The loaded set is validated before it is returned.
pub fn load_models(root: &Path, config: &LazyDefaultsConfig) -> Result<Vec<TableDef>> {
    let models_dir = root.join(config.models_dir());
    if !models_dir.exists() {
        tracing::debug!(dir = %models_dir.display(), "models directory does not exist");
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    collect_model_paths(&models_dir, &mut paths)?;
    paths.sort();

    let mut tables = Vec::with_capacity(paths.len());
    for path in &paths {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read model file: {}", path.display()))?;
        let table = parse_model(path, &content)?;
        tracing::trace!(table = %table.name, path = %path.display(), "loaded model");
        tables.push(table);
    }

    validate_schema(&tables).map_err(|e| anyhow::anyhow!("model validation failed: {}", e))?;

    Ok(tables)
}

/// Load models and register them, configured, in a [`ModelRegistry`]
/// seeded with the project-wide defaults.
pub fn load_registry(root: &Path, config: &LazyDefaultsConfig) -> Result<ModelRegistry> {
    let mut registry = ModelRegistry::new(*config.defaults());
    for table in load_models(root, config)? {
        registry.register(table)?;
    }
    registry.configure_all();
    Ok(registry)
}

/// Parse one model file; the format is chosen by extension.
pub fn parse_model(path: &Path, content: &str) -> Result<TableDef> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => serde_json::from_str(content)
            .with_context(|| format!("parse JSON model: {}", path.display())),
        Some("yaml") | Some("yml") => serde_yaml::from_str(content)
            .with_context(|| format!("parse YAML model: {}", path.display())),
        _ => anyhow::bail!("unsupported model file: {}", path.display()),
    }
}

fn collect_model_paths(dir: &Path, paths: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("read models directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry.context("read directory entry")?;
        let path = entry.path();

        if path.is_dir() {
            collect_model_paths(&path, paths)?;
            continue;
        }

        let ext = path.extension().and_then(|s| s.to_str());
        if path.is_file() && matches!(ext, Some("json") | Some("yaml") | Some("yml")) {
            paths.push(path);
        }
    }

    Ok(())
}
