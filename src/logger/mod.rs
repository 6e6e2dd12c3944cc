mod builder;
mod config;
mod diagnostics;
mod error;
mod field;
mod format;
mod level;
mod log;
mod timezone;

pub use builder::LoggerBuilder;
pub use config::LoggerConfig;
pub use diagnostics::{DiagnosticSink, StderrDiagnostics};
pub use error::LoggerError;
pub use field::LogField;
pub use format::LoggerFormat;
pub use level::LoggerLevel;
pub use log::{StructuredLogger, TracingLogger};
pub use timezone::LoggerTimeZone;

/// Builds a logging capability from the given configuration.
///
/// Unknown `format` or `level` values never fail construction: they fall
/// back to `cloud` and `info` respectively, with a plain-text warning on
/// standard error. Use [`LoggerBuilder`] to redirect records or those
/// warnings elsewhere, and [`TracingLogger::try_init`] to additionally
/// install the result as the process-global default.
///
/// # Examples
/// ```rust
/// use kumo_log::{LogField, LoggerConfig, StructuredLogger, build_logger};
///
/// let cfg = LoggerConfig {
///     level: "debug".to_string(),
///     format: "cloud".to_string(),
///     app_name: "orders".to_string(),
///     app_version: "1.4.2".to_string(),
///     ..Default::default()
/// };
/// let logger = build_logger(cfg).expect("failed to build logger");
/// logger.info("listening", &[LogField::new("port", 8080)]);
/// ```
pub fn build_logger(cfg: LoggerConfig) -> Result<TracingLogger, LoggerError> {
    LoggerBuilder::new(cfg).build()
}
