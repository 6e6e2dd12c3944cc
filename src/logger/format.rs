use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::logger::error::LoggerError;

/// Output encoding of the assembled logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerFormat {
    /// Human-readable lines for a developer terminal.
    Local,
    /// Single-line JSON records for log collectors.
    Cloud,
}

impl LoggerFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoggerFormat::Local => "local",
            LoggerFormat::Cloud => "cloud",
        }
    }
}

impl Default for LoggerFormat {
    fn default() -> Self {
        LoggerFormat::Cloud
    }
}

impl fmt::Display for LoggerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoggerFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        match norm.as_str() {
            "local" => Ok(LoggerFormat::Local),
            "cloud" => Ok(LoggerFormat::Cloud),
            _ => Err(LoggerError::InvalidFormat(s.to_string())),
        }
    }
}
