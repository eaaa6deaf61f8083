use std::path::{Path, PathBuf};

use lazydefaults_core::LazyOptions;
use serde::{Deserialize, Serialize};

use crate::backend::Backend;
use crate::file_format::FileFormat;

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "lazydefaults.json";

/// Top-level lazydefaults configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct LazyDefaultsConfig {
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,
    /// Format used for newly created model files.
    #[serde(default)]
    pub model_format: FileFormat,
    /// Backend used by `sql` when none is given on the command line.
    #[serde(default)]
    pub backend: Backend,
    /// Project-wide option set; per-model `lazy_options` override it.
    #[serde(default)]
    pub defaults: LazyOptions,
}

fn default_models_dir() -> PathBuf {
    PathBuf::from("models")
}

impl Default for LazyDefaultsConfig {
    fn default() -> Self {
        Self {
            models_dir: default_models_dir(),
            model_format: FileFormat::default(),
            backend: Backend::default(),
            defaults: LazyOptions::default(),
        }
    }
}

impl LazyDefaultsConfig {
    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    pub fn defaults(&self) -> &LazyOptions {
        &self.defaults
    }
}
