pub mod schema;

pub use schema::{
    BoundOp, ColumnDef, ColumnInfo, ColumnKind, ColumnName, ColumnType, ComplexColumnType,
    DefaultCall, DefaultValue, FieldValue, LazyOptions, LazyOverrides, ServerDefault,
    SimpleColumnType, TableConstraint, TableDef, TableName,
};
