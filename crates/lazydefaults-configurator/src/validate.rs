use std::collections::HashSet;

use lazydefaults_core::{ColumnDef, ColumnKind, TableDef};

use crate::error::ConfigureError;

/// Validate a set of models eagerly.
/// Checks for:
/// - Duplicate table names
/// - Everything [`validate_table`] checks
pub fn validate_schema(schema: &[TableDef]) -> Result<(), ConfigureError> {
    let mut table_names = HashSet::new();
    for table in schema {
        if !table_names.insert(&table.name) {
            return Err(ConfigureError::DuplicateTableName(table.name.clone()));
        }
    }

    for table in schema {
        validate_table(table)?;
    }

    Ok(())
}

/// Validate column metadata of a single model.
/// Checks for:
/// - Duplicate column names
/// - `min` greater than `max`
/// - Bounds on a non-numeric column
/// - `auto_now` on a column that is not a timestamp
pub fn validate_table(table: &TableDef) -> Result<(), ConfigureError> {
    let mut column_names = HashSet::new();
    for column in &table.columns {
        if !column_names.insert(column.name.as_str()) {
            return Err(ConfigureError::DuplicateColumnName(
                table.name.clone(),
                column.name.clone(),
            ));
        }
        validate_column(column, &table.name)?;
    }
    Ok(())
}

fn validate_column(column: &ColumnDef, table_name: &str) -> Result<(), ConfigureError> {
    if column.info.has_bounds() && !column.r#type.is_numeric() {
        return Err(ConfigureError::BoundsOnNonNumericColumn(
            table_name.to_string(),
            column.name.clone(),
        ));
    }

    if let (Some(min), Some(max)) = (column.info.min, column.info.max) {
        if min > max {
            return Err(ConfigureError::InvertedBounds(
                table_name.to_string(),
                column.name.clone(),
                min,
                max,
            ));
        }
    }

    if column.info.auto_now && column.kind() != ColumnKind::Timestamp {
        return Err(ConfigureError::AutoNowOnNonTimestampColumn(
            table_name.to_string(),
            column.name.clone(),
        ));
    }

    Ok(())
}
