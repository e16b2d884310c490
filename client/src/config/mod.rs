mod config;
mod log_config;

pub use config::{CONFIG_FILE_NAME, get_config_manager};
pub use log_config::LogConfig;
