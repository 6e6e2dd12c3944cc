use crate::logger::timezone::LoggerTimeZone;

/// Settings the logger is built from.
///
/// `level` and `format` stay plain strings on purpose: they usually come
/// straight from the environment, and unknown values degrade to safe
/// defaults instead of failing startup.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Minimum severity: `debug`, `info`, `warn` or `error`
    /// (case-insensitive). Anything else falls back to `info`.
    pub level: String,
    /// Output format: `local` or `cloud` (case-insensitive). Anything
    /// else falls back to `cloud`.
    pub format: String,
    /// Application name, attached to every cloud-format record.
    pub app_name: String,
    /// Application version, attached to every cloud-format record.
    pub app_version: String,
    /// Timezone for local-format timestamps.
    pub timezone: LoggerTimeZone,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "cloud".to_string(),
            app_name: String::new(),
            app_version: String::new(),
            timezone: LoggerTimeZone::default(),
        }
    }
}
