use chrono::{DateTime, Utc};
use sea_query::{Alias, Query};

use lazydefaults_core::{FieldValue, TableDef};

use crate::error::QueryError;

use super::helpers::field_value_to_expr;
use super::types::{BuiltQuery, DatabaseBackend, RawSql};

/// Builds an INSERT for one row.
///
/// Columns listed in `values` are bound as given. Omitted columns with a
/// client-side default get that default, evaluated against `now`; any other
/// omitted column is left to its server default (or NULL).
pub fn build_insert(
    backend: DatabaseBackend,
    table: &TableDef,
    values: &[(&str, FieldValue)],
    now: DateTime<Utc>,
) -> Result<BuiltQuery, QueryError> {
    for (name, _) in values {
        if table.column(name).is_none() {
            return Err(QueryError::UnknownColumn(
                table.name.clone(),
                (*name).to_string(),
            ));
        }
    }

    let mut columns = Vec::new();
    let mut exprs = Vec::new();
    for column in &table.columns {
        let explicit = values.iter().find(|(name, _)| *name == column.name);
        let value = match (explicit, &column.default) {
            (Some((_, value)), _) => value.clone(),
            (None, Some(default)) => default.evaluate(now),
            (None, None) => continue,
        };
        columns.push(Alias::new(&column.name));
        exprs.push(field_value_to_expr(&value));
    }

    tracing::trace!(table = %table.name, ?backend, columns = columns.len(), "building insert");

    if columns.is_empty() {
        let quoted = quote_ident(&table.name, '"');
        return Ok(BuiltQuery::Raw(RawSql::per_backend(
            format!("INSERT INTO {quoted} DEFAULT VALUES"),
            format!("INSERT INTO {} () VALUES ()", quote_ident(&table.name, '`')),
            format!("INSERT INTO {quoted} DEFAULT VALUES"),
        )));
    }

    let stmt = Query::insert()
        .into_table(Alias::new(&table.name))
        .columns(columns)
        .values(exprs)
        .map_err(|e| QueryError::Other(format!("{e:?}")))?
        .to_owned();

    Ok(BuiltQuery::Insert(Box::new(stmt)))
}

fn quote_ident(name: &str, quote: char) -> String {
    let escaped = name.replace(quote, &format!("{quote}{quote}"));
    format!("{quote}{escaped}{quote}")
}
