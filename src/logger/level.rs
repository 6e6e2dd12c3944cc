use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::logger::error::LoggerError;

/// Minimum severity accepted by the logger configuration.
///
/// This is a closed set of four levels. The engine's `trace` level is
/// deliberately not part of the grammar, so `"trace"` falls back like any
/// other unknown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LoggerLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoggerLevel::Debug => "debug",
            LoggerLevel::Info => "info",
            LoggerLevel::Warn => "warn",
            LoggerLevel::Error => "error",
        }
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        LoggerLevel::Info
    }
}

impl fmt::Display for LoggerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        match norm.as_str() {
            "debug" => Ok(LoggerLevel::Debug),
            "info" => Ok(LoggerLevel::Info),
            "warn" => Ok(LoggerLevel::Warn),
            "error" => Ok(LoggerLevel::Error),
            _ => Err(LoggerError::InvalidLogLevel(s.to_string())),
        }
    }
}
