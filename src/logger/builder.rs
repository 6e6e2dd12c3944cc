use std::io;
use std::str::FromStr;

use time::{
    UtcOffset,
    format_description::{self, OwnedFormatItem, well_known::Rfc3339},
};
use tracing::Dispatch;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::MakeWriter, fmt::time::OffsetTime, fmt::writer::BoxMakeWriter,
    layer::SubscriberExt,
};

use crate::logger::config::LoggerConfig;
use crate::logger::diagnostics::{DiagnosticSink, StderrDiagnostics};
use crate::logger::error::LoggerError;
use crate::logger::format::LoggerFormat;
use crate::logger::level::LoggerLevel;
use crate::logger::log::{AppIdentity, TracingLogger};
use crate::logger::timezone::LoggerTimeZone;

/// Local-format timestamp layout: millisecond precision, offset visible.
pub(crate) const LOCAL_TIMESTAMP_FORMAT: &str = "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3][offset_hour sign:mandatory]:[offset_minute]";

/// Assembles a [`TracingLogger`] from a [`LoggerConfig`], with optional
/// overrides for tests and embedders.
///
/// By default records and diagnostics both go to standard error.
pub struct LoggerBuilder {
    cfg: LoggerConfig,
    writer: BoxMakeWriter,
    diagnostics: Box<dyn DiagnosticSink>,
    ansi: Option<bool>,
    local_timestamp_format: String,
}

impl LoggerBuilder {
    pub fn new(cfg: LoggerConfig) -> Self {
        Self {
            cfg,
            writer: BoxMakeWriter::new(io::stderr),
            diagnostics: Box::new(StderrDiagnostics),
            ansi: None,
            local_timestamp_format: LOCAL_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Replaces the sink that receives configuration warnings and
    /// construction failures.
    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Box::new(sink);
        self
    }

    /// Replaces the writer that receives log records.
    pub fn with_writer<W>(mut self, writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        self.writer = BoxMakeWriter::new(writer);
        self
    }

    /// Forces ANSI color on or off for local-format output. Without an
    /// override, color is used only when standard error is a terminal.
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = Some(ansi);
        self
    }

    /// Overrides the local-format timestamp layout (a `time` format
    /// description). An unparseable layout fails construction.
    pub fn with_local_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.local_timestamp_format = format.into();
        self
    }

    /// Builds the logging capability.
    ///
    /// Unknown `format` and `level` strings never fail: they degrade to
    /// `cloud` and `info` with a line on the diagnostic sink. An engine
    /// assembly failure is reported to the sink and returned.
    pub fn build(self) -> Result<TracingLogger, LoggerError> {
        let Self {
            cfg,
            writer,
            diagnostics,
            ansi,
            local_timestamp_format,
        } = self;

        let format = LoggerFormat::from_str(&cfg.format).unwrap_or_else(|_| {
            diagnostics.emit(&format!(
                "invalid LOG_FORMAT {:?}, fallback to 'cloud'",
                cfg.format
            ));
            LoggerFormat::Cloud
        });
        let level = LoggerLevel::from_str(&cfg.level).unwrap_or_else(|_| {
            diagnostics.emit(&format!(
                "invalid LOG_LEVEL {:?}, fallback to 'info'",
                cfg.level
            ));
            LoggerLevel::Info
        });

        // The identity rides on every record of the machine-facing format,
        // fallback included.
        let identity = (format == LoggerFormat::Cloud).then(|| AppIdentity {
            app: cfg.app_name.clone(),
            version: cfg.app_version.clone(),
        });

        let ansi = ansi.unwrap_or_else(|| atty::is(atty::Stream::Stderr));
        let dispatch = match mk_dispatch(
            format,
            level,
            cfg.timezone,
            writer,
            ansi,
            &local_timestamp_format,
        ) {
            Ok(dispatch) => dispatch,
            Err(e) => {
                diagnostics.emit(&format!("failed to build logger: {e}"));
                return Err(e);
            }
        };

        Ok(TracingLogger::new(dispatch, identity))
    }
}

fn mk_dispatch(
    format: LoggerFormat,
    level: LoggerLevel,
    timezone: LoggerTimeZone,
    writer: BoxMakeWriter,
    ansi: bool,
    timestamp_format: &str,
) -> Result<Dispatch, LoggerError> {
    let filter = mk_filter(level);
    match format {
        LoggerFormat::Local => {
            let fmt_layer = fmt::layer()
                .with_ansi(ansi)
                .with_target(true)
                .with_timer(mk_local_timer(timezone.resolve(), timestamp_format)?)
                .with_writer(writer);

            let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);
            Ok(Dispatch::new(subscriber))
        }
        LoggerFormat::Cloud => {
            let fmt_layer = fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_span_list(false)
                .with_target(true)
                .with_timer(mk_cloud_timer())
                .with_writer(writer);

            let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);
            Ok(Dispatch::new(subscriber))
        }
    }
}

fn mk_filter(level: LoggerLevel) -> EnvFilter {
    EnvFilter::new(level.as_str())
}

fn mk_local_timer(
    offset: UtcOffset,
    timestamp_format: &str,
) -> Result<OffsetTime<OwnedFormatItem>, LoggerError> {
    let items = format_description::parse_owned::<2>(timestamp_format)?;
    Ok(OffsetTime::new(offset, items))
}

fn mk_cloud_timer() -> OffsetTime<Rfc3339> {
    OffsetTime::new(UtcOffset::UTC, Rfc3339)
}
