//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive scoping the level to Herald's own crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "herald=trace",
            LogLevel::Debug => "herald=debug",
            LogLevel::Info => "herald=info",
            LogLevel::Warn => "herald=warn",
            LogLevel::Error => "herald=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
