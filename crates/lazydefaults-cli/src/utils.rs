use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use lazydefaults_config::{Backend, LazyDefaultsConfig};
use lazydefaults_configurator::ModelRegistry;
use lazydefaults_query::DatabaseBackend;

/// Project root: the current working directory.
pub fn project_root() -> Result<PathBuf> {
    env::current_dir().context("resolve current directory")
}

/// Load lazydefaults.json from the current directory (or defaults).
pub fn load_config() -> Result<LazyDefaultsConfig> {
    lazydefaults_loader::load_config(&project_root()?)
}

/// Load and configure every model of the current project.
pub fn load_registry(config: &LazyDefaultsConfig) -> Result<ModelRegistry> {
    lazydefaults_loader::load_registry(&project_root()?, config)
}

pub fn database_backend(backend: Backend) -> DatabaseBackend {
    match backend {
        Backend::Postgres => DatabaseBackend::Postgres,
        Backend::Mysql => DatabaseBackend::MySql,
        Backend::Sqlite => DatabaseBackend::Sqlite,
    }
}

/// Switches the working directory for the lifetime of the guard.
#[cfg(test)]
pub struct CwdGuard {
    original: PathBuf,
}

#[cfg(test)]
impl CwdGuard {
    pub fn new(dir: &std::path::Path) -> Self {
        let original = env::current_dir().unwrap();
        env::set_current_dir(dir).unwrap();
        Self { original }
    }
}

#[cfg(test)]
impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original);
    }
}
