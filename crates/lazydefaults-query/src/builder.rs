use lazydefaults_core::TableDef;

use crate::sql::{BuiltQuery, DatabaseBackend, build_create_table, build_drop_table};

/// CREATE TABLE statements for every table, in the given order.
pub fn build_create_all(backend: DatabaseBackend, tables: &[TableDef]) -> Vec<BuiltQuery> {
    tables
        .iter()
        .map(|table| build_create_table(backend, table))
        .collect()
}

/// DROP TABLE statements in reverse order of declaration.
pub fn build_drop_all(tables: &[TableDef]) -> Vec<BuiltQuery> {
    tables
        .iter()
        .rev()
        .map(|table| build_drop_table(&table.name))
        .collect()
}
