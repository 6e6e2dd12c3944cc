use std::backtrace::Backtrace;

use tracing::{Dispatch, debug, dispatcher, error, info, warn};

use crate::logger::error::LoggerError;
use crate::logger::field::{self, LogField};
use crate::logger::level::LoggerLevel;

/// Leveled structured logging, decoupled from the engine behind it.
///
/// Every method takes the record message plus zero or more structured
/// fields. Implementations must be safe to share across threads.
pub trait StructuredLogger: Send + Sync {
    /// Records a debug-level event.
    fn debug(&self, message: &str, fields: &[LogField]);
    /// Records an info-level event.
    fn info(&self, message: &str, fields: &[LogField]);
    /// Records a warn-level event.
    fn warn(&self, message: &str, fields: &[LogField]);
    /// Records an error-level event, capturing the current stack trace.
    fn error(&self, message: &str, fields: &[LogField]);
}

/// Application identity attached to every cloud-format record.
#[derive(Debug, Clone)]
pub(crate) struct AppIdentity {
    pub(crate) app: String,
    pub(crate) version: String,
}

/// A logging capability backed by its own `tracing` dispatcher.
///
/// Encoding, minimum level and destination are fixed at construction.
/// Independent instances never share state, so differently configured
/// loggers can coexist in one process. Cloning is cheap: the dispatcher
/// is reference-counted and clones write to the same destination.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    dispatch: Dispatch,
    identity: Option<AppIdentity>,
}

impl TracingLogger {
    pub(crate) fn new(dispatch: Dispatch, identity: Option<AppIdentity>) -> Self {
        Self { dispatch, identity }
    }

    /// Installs this logger's dispatcher as the process-global default,
    /// so free-standing `tracing` macros route through it as well.
    ///
    /// Only the first installation in a process can succeed; any later
    /// attempt fails with [`LoggerError::AlreadyInitialized`].
    pub fn try_init(&self) -> Result<(), LoggerError> {
        dispatcher::set_global_default(self.dispatch.clone())
            .map_err(|_| LoggerError::AlreadyInitialized)
    }

    fn emit(&self, level: LoggerLevel, message: &str, fields: &[LogField]) {
        // Runtime-keyed caller fields ride in one pre-encoded JSON field,
        // since event macros only accept keys known at compile time.
        let payload = field::encode_fields(fields);
        let payload = payload.as_deref();
        let (app, version) = match &self.identity {
            Some(identity) => (Some(identity.app.as_str()), Some(identity.version.as_str())),
            None => (None, None),
        };

        dispatcher::with_default(&self.dispatch, || match level {
            LoggerLevel::Debug => debug!(app, version, fields = payload, "{message}"),
            LoggerLevel::Info => info!(app, version, fields = payload, "{message}"),
            LoggerLevel::Warn => warn!(app, version, fields = payload, "{message}"),
            LoggerLevel::Error => {
                // Stack capture is costly, so only error records carry one.
                let stacktrace = Backtrace::force_capture();
                error!(
                    app,
                    version,
                    fields = payload,
                    stacktrace = %stacktrace,
                    "{message}"
                );
            }
        });
    }
}

impl StructuredLogger for TracingLogger {
    fn debug(&self, message: &str, fields: &[LogField]) {
        self.emit(LoggerLevel::Debug, message, fields);
    }

    fn info(&self, message: &str, fields: &[LogField]) {
        self.emit(LoggerLevel::Info, message, fields);
    }

    fn warn(&self, message: &str, fields: &[LogField]) {
        self.emit(LoggerLevel::Warn, message, fields);
    }

    fn error(&self, message: &str, fields: &[LogField]) {
        self.emit(LoggerLevel::Error, message, fields);
    }
}

// ============================== Tests ==============================
