use sea_query::{Alias, Expr, Index, SimpleExpr, Table, TableCreateStatement};

use lazydefaults_core::{BoundOp, TableConstraint, TableDef};

use super::helpers::build_sea_column_def;
use super::types::{BuiltQuery, DatabaseBackend};

fn build_create_table_for_backend(backend: DatabaseBackend, table: &TableDef) -> TableCreateStatement {
    let mut stmt = Table::create().table(Alias::new(&table.name)).to_owned();

    // A single inline primary key stays on its column; several become a
    // composite table-level key.
    let inline_pk: Vec<&str> = table
        .columns
        .iter()
        .filter(|c| c.primary_key)
        .map(|c| c.name.as_str())
        .collect();
    let has_table_primary_key = table.has_primary_key_constraint();
    let single_inline_pk = inline_pk.len() == 1 && !has_table_primary_key;

    for column in &table.columns {
        let mut col = build_sea_column_def(backend, column);

        if column.primary_key && single_inline_pk {
            col.primary_key();
        }

        if column.unique {
            col.unique_key();
        }

        stmt = stmt.col(col).to_owned();
    }

    if inline_pk.len() > 1 && !has_table_primary_key {
        let mut pk_idx = Index::create();
        for c in &inline_pk {
            pk_idx = pk_idx.col(Alias::new(*c)).to_owned();
        }
        stmt = stmt.primary_key(&mut pk_idx).to_owned();
    }

    for constraint in &table.constraints {
        match constraint {
            TableConstraint::PrimaryKey { columns } => {
                let mut pk_idx = Index::create();
                for c in columns {
                    pk_idx = pk_idx.col(Alias::new(c)).to_owned();
                }
                stmt = stmt.primary_key(&mut pk_idx).to_owned();
            }
            TableConstraint::Check { expr } => {
                stmt = stmt
                    .check(Into::<SimpleExpr>::into(Expr::cust(expr.clone())))
                    .to_owned();
            }
            TableConstraint::Bound { column, op, value } => {
                let col = Expr::col(Alias::new(column));
                let check = match op {
                    BoundOp::Gte => col.gte(*value),
                    BoundOp::Lte => col.lte(*value),
                };
                stmt = stmt.check(check).to_owned();
            }
        }
    }

    stmt
}

pub fn build_create_table(backend: DatabaseBackend, table: &TableDef) -> BuiltQuery {
    tracing::trace!(table = %table.name, ?backend, "building create table");
    BuiltQuery::CreateTable(Box::new(build_create_table_for_backend(backend, table)))
}
