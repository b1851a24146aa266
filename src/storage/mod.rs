//! Configuration persistence.

pub mod config;

pub use config::{get_config_path, load_config, save_config, AppConfig, ConfigError};
