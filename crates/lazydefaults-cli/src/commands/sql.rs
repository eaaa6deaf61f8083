use anyhow::Result;
use colored::Colorize;
use lazydefaults_config::Backend;
use lazydefaults_configurator::ModelRegistry;
use lazydefaults_query::{DatabaseBackend, build_create_table};

use crate::utils::{database_backend, load_config, load_registry};

pub fn cmd_sql(backend: Option<Backend>) -> Result<()> {
    let config = load_config()?;
    let backend = database_backend(backend.unwrap_or(config.backend));
    let registry = load_registry(&config)?;

    let statements = render_statements(&registry, backend);
    if statements.is_empty() {
        println!("{}", "No models found.".bright_yellow());
        return Ok(());
    }

    for sql in statements {
        println!("{};", sql.trim());
        println!();
    }
    Ok(())
}

/// CREATE TABLE statements for every registered model, in registration order.
fn render_statements(registry: &ModelRegistry, backend: DatabaseBackend) -> Vec<String> {
    registry
        .tables()
        .map(|table| build_create_table(backend, table).build(backend))
        .collect()
}
