pub mod backend;
pub mod config;
pub mod file_format;

pub use backend::Backend;
pub use config::{CONFIG_FILE_NAME, LazyDefaultsConfig};
pub use file_format::FileFormat;
