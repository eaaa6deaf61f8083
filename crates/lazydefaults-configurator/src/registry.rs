use lazydefaults_core::{LazyOptions, TableDef};

use crate::configure::configure_table;
use crate::error::ConfigureError;

#[derive(Debug, Clone)]
struct RegisteredModel {
    table: TableDef,
    configured: bool,
}

/// Holds declared models and configures each of them exactly once.
///
/// Models are kept in registration order. [`ModelRegistry::configure_all`]
/// plays the part of the ORM's "mapper configured" step: it must run before
/// any DDL is built from the registered tables.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    defaults: LazyOptions,
    models: Vec<RegisteredModel>,
}

impl ModelRegistry {
    pub fn new(defaults: LazyOptions) -> Self {
        Self {
            defaults,
            models: Vec::new(),
        }
    }

    pub fn defaults(&self) -> &LazyOptions {
        &self.defaults
    }

    pub fn register(&mut self, table: TableDef) -> Result<(), ConfigureError> {
        if self.models.iter().any(|m| m.table.name == table.name) {
            return Err(ConfigureError::DuplicateModel(table.name));
        }
        tracing::debug!(table = %table.name, "registered model");
        self.models.push(RegisteredModel {
            table,
            configured: false,
        });
        Ok(())
    }

    /// Configures every model that has not been configured yet and returns
    /// how many were configured by this call.
    pub fn configure_all(&mut self) -> usize {
        let mut count = 0;
        for model in self.models.iter_mut().filter(|m| !m.configured) {
            configure_table(&mut model.table, &self.defaults);
            model.configured = true;
            count += 1;
        }
        if count > 0 {
            tracing::debug!(count, "configured models");
        }
        count
    }

    pub fn is_configured(&self, name: &str) -> bool {
        self.models
            .iter()
            .any(|m| m.table.name == name && m.configured)
    }

    pub fn get(&self, name: &str) -> Option<&TableDef> {
        self.models
            .iter()
            .find(|m| m.table.name == name)
            .map(|m| &m.table)
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableDef> {
        self.models.iter().map(|m| &m.table)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Configures pending models and hands back all tables in registration order.
    pub fn into_tables(mut self) -> Vec<TableDef> {
        self.configure_all();
        self.models.into_iter().map(|m| m.table).collect()
    }
}
