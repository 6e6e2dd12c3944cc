use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Invalid logger format: {0} (expected: local|cloud)")]
    InvalidFormat(String),
    #[error("Invalid log level: {0} (expected: debug|info|warn|error)")]
    InvalidLogLevel(String),
    #[error("Invalid timestamp format: {0}")]
    Timestamp(#[from] time::error::InvalidFormatDescription),
    #[error("Logger has been already initialized")]
    AlreadyInitialized,
}
