pub mod create_table;
pub mod drop_table;
pub mod helpers;
pub mod insert;
pub mod types;

pub use create_table::build_create_table;
pub use drop_table::build_drop_table;
pub use helpers::render_server_default;
pub use insert::build_insert;
pub use types::{BuiltQuery, DatabaseBackend, RawSql};
