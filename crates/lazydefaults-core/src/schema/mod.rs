pub mod column;
pub mod constraint;
pub mod default;
pub mod info;
pub mod names;
pub mod options;
pub mod table;
pub mod value;

pub use column::{ColumnDef, ColumnKind, ColumnType, ComplexColumnType, SimpleColumnType};
pub use constraint::{BoundOp, TableConstraint};
pub use default::{DefaultCall, DefaultValue, ServerDefault};
pub use info::ColumnInfo;
pub use names::{ColumnName, TableName};
pub use options::{LazyOptions, LazyOverrides};
pub use table::TableDef;
pub use value::FieldValue;
