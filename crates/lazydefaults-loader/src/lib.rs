pub mod config;
pub mod models;

pub use config::{load_config, load_config_from_path};
pub use models::{load_models, load_registry, parse_model};
