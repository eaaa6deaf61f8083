pub mod configure;
pub mod error;
pub mod registry;
pub mod validate;

pub use configure::{apply_defaults, configure_table};
pub use error::ConfigureError;
pub use registry::ModelRegistry;
pub use validate::{validate_schema, validate_table};
