use chrono::{DateTime, Utc};
use sea_query::{
    Alias, ColumnDef as SeaColumnDef, Expr, InsertStatement, MysqlQueryBuilder,
    PostgresQueryBuilder, SchemaStatementBuilder, SimpleExpr, SqliteQueryBuilder, Value,
};

use lazydefaults_core::{
    ColumnDef, ColumnType, ComplexColumnType, FieldValue, ServerDefault, SimpleColumnType,
};

use super::types::DatabaseBackend;

/// Helper function to convert a schema statement to SQL for a specific backend
pub fn build_schema_statement<T: SchemaStatementBuilder>(
    stmt: &T,
    backend: DatabaseBackend,
) -> String {
    match backend {
        DatabaseBackend::Postgres => stmt.to_string(PostgresQueryBuilder),
        DatabaseBackend::MySql => stmt.to_string(MysqlQueryBuilder),
        DatabaseBackend::Sqlite => stmt.to_string(SqliteQueryBuilder),
    }
}

/// Helper function to convert an INSERT statement to SQL for a specific backend
pub fn build_query_statement(stmt: &InsertStatement, backend: DatabaseBackend) -> String {
    match backend {
        DatabaseBackend::Postgres => stmt.to_string(PostgresQueryBuilder),
        DatabaseBackend::MySql => stmt.to_string(MysqlQueryBuilder),
        DatabaseBackend::Sqlite => stmt.to_string(SqliteQueryBuilder),
    }
}

/// Apply lazydefaults ColumnType to sea_query ColumnDef
pub fn apply_column_type(col: &mut SeaColumnDef, ty: &ColumnType) {
    match ty {
        ColumnType::Simple(simple) => match simple {
            SimpleColumnType::SmallInt => {
                col.small_integer();
            }
            SimpleColumnType::Integer => {
                col.integer();
            }
            SimpleColumnType::BigInt => {
                col.big_integer();
            }
            SimpleColumnType::Real => {
                col.float();
            }
            SimpleColumnType::DoublePrecision => {
                col.double();
            }
            SimpleColumnType::Text => {
                col.text();
            }
            SimpleColumnType::Boolean => {
                col.boolean();
            }
            SimpleColumnType::Date => {
                col.date();
            }
            SimpleColumnType::Time => {
                col.time();
            }
            SimpleColumnType::Timestamp => {
                col.timestamp();
            }
            SimpleColumnType::Timestamptz => {
                col.timestamp_with_time_zone();
            }
            SimpleColumnType::Bytea => {
                col.binary();
            }
            SimpleColumnType::Uuid => {
                col.uuid();
            }
            SimpleColumnType::Json => {
                col.json();
            }
        },
        ColumnType::Complex(complex) => match complex {
            ComplexColumnType::Varchar { length } => {
                col.string_len(*length);
            }
            ComplexColumnType::Char { length } => {
                col.char_len(*length);
            }
            ComplexColumnType::Numeric { precision, scale } => {
                col.decimal_len(*precision, *scale);
            }
            ComplexColumnType::Custom { custom_type } => {
                col.custom(Alias::new(custom_type));
            }
        },
    }
}

/// Convert a raw default expression to the appropriate backend-specific spelling
pub fn convert_default_for_backend(default: &str, backend: DatabaseBackend) -> String {
    match default {
        "gen_random_uuid()" => match backend {
            DatabaseBackend::Postgres => "gen_random_uuid()".to_string(),
            DatabaseBackend::MySql => "(UUID())".to_string(),
            DatabaseBackend::Sqlite => "(lower(hex(randomblob(16))))".to_string(),
        },
        "current_timestamp()" | "now()" | "CURRENT_TIMESTAMP" => now_function(backend).to_string(),
        other => other.to_string(),
    }
}

fn now_function(backend: DatabaseBackend) -> &'static str {
    match backend {
        DatabaseBackend::Postgres => "now()",
        DatabaseBackend::MySql | DatabaseBackend::Sqlite => "CURRENT_TIMESTAMP",
    }
}

fn quote_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Render a server default as the SQL text of a `DEFAULT` clause
pub fn render_server_default(default: &ServerDefault, backend: DatabaseBackend) -> String {
    match default {
        ServerDefault::Boolean(value) => match (backend, *value) {
            (DatabaseBackend::Sqlite, true) => "1".to_string(),
            (DatabaseBackend::Sqlite, false) => "0".to_string(),
            (_, true) => "true".to_string(),
            (_, false) => "false".to_string(),
        },
        ServerDefault::Literal(text) => quote_literal(text),
        ServerDefault::Now => now_function(backend).to_string(),
        ServerDefault::Expression(sql) => convert_default_for_backend(sql, backend),
    }
}

/// Build sea_query ColumnDef from lazydefaults ColumnDef for a specific backend
pub fn build_sea_column_def(backend: DatabaseBackend, column: &ColumnDef) -> SeaColumnDef {
    let mut col = SeaColumnDef::new(Alias::new(&column.name));
    apply_column_type(&mut col, &column.r#type);

    if !column.nullable {
        col.not_null();
    }

    if let Some(default) = &column.server_default {
        let rendered = render_server_default(default, backend);
        col.default(Into::<SimpleExpr>::into(Expr::cust(rendered)));
    }

    col
}

fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

/// Convert a bound value into a sea_query expression
pub fn field_value_to_expr(value: &FieldValue) -> SimpleExpr {
    match value {
        FieldValue::Null => Into::<SimpleExpr>::into(Expr::cust("NULL")),
        FieldValue::Bool(b) => SimpleExpr::Value(Value::from(*b)),
        FieldValue::Integer(i) => SimpleExpr::Value(Value::from(*i)),
        FieldValue::Text(s) => SimpleExpr::Value(Value::from(s.clone())),
        FieldValue::Timestamp(ts) => SimpleExpr::Value(Value::from(format_timestamp(ts))),
    }
}
