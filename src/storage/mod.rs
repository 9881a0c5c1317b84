//! Application configuration and data paths.

pub mod config;

pub use config::{load_config, save_config, AppConfig, ConfigError};
