//! Derive column CHECK constraints, nullability and defaults from model
//! metadata, then render the result as DDL.
//!
//! ```
//! use lazydefaults::{
//!     ColumnDef, ColumnInfo, DatabaseBackend, LazyOptions, ModelRegistry, SimpleColumnType,
//!     TableDef, build_create_table,
//! };
//!
//! let mut registry = ModelRegistry::new(LazyOptions::default());
//! registry
//!     .register(TableDef::new("user").with_column(
//!         ColumnDef::new("age", SimpleColumnType::Integer)
//!             .with_info(ColumnInfo::bounds(Some(13), None)),
//!     ))
//!     .unwrap();
//! registry.configure_all();
//!
//! let user = registry.get("user").unwrap();
//! let sql = build_create_table(DatabaseBackend::Postgres, user).build(DatabaseBackend::Postgres);
//! assert!(sql.contains(r#"CHECK ("age" >= 13)"#));
//! ```

pub use lazydefaults_core::*;

pub use lazydefaults_configurator::{
    ConfigureError, ModelRegistry, apply_defaults, configure_table, validate_schema,
    validate_table,
};

pub use lazydefaults_query::{
    BuiltQuery, DatabaseBackend, QueryError, build_create_all, build_create_table,
    build_drop_all, build_drop_table, build_insert,
};

#[cfg(feature = "loader")]
pub use lazydefaults_config::{Backend, CONFIG_FILE_NAME, LazyDefaultsConfig};
#[cfg(feature = "loader")]
pub use lazydefaults_loader::{load_config, load_models, load_registry};
