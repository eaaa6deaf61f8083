pub mod builder;
pub mod error;
pub mod sql;

pub use builder::{build_create_all, build_drop_all};
pub use error::QueryError;
pub use sql::{
    BuiltQuery, DatabaseBackend, RawSql, build_create_table, build_drop_table, build_insert,
    render_server_default,
};
