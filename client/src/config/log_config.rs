use serde::{Deserialize, Serialize};
use tictactoe_common::logger::LogLevel;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    pub level: LogLevel,
    #[serde(default)]
    pub use_prefix: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            use_prefix: false,
        }
    }
}
