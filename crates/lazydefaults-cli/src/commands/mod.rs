pub mod init;
pub mod new;
pub mod schema;
pub mod show;
pub mod sql;

pub use init::cmd_init;
pub use new::cmd_new;
pub use schema::cmd_schema;
pub use show::cmd_show;
pub use sql::cmd_sql;
