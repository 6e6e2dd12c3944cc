use time::UtcOffset;

/// Timezone applied to local-format timestamps.
///
/// Cloud-format timestamps are always UTC and ignore this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerTimeZone {
    /// Render timestamps in UTC.
    Utc,
    /// Render timestamps in the machine's local offset. Falls back to UTC
    /// when the offset cannot be determined soundly.
    Local,
    /// Render timestamps at a fixed offset.
    Fixed(UtcOffset),
}

impl LoggerTimeZone {
    /// Resolves to the concrete offset handed to the timestamp encoder.
    pub fn resolve(&self) -> UtcOffset {
        match self {
            LoggerTimeZone::Utc => UtcOffset::UTC,
            LoggerTimeZone::Local => UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
            LoggerTimeZone::Fixed(offset) => *offset,
        }
    }
}

impl Default for LoggerTimeZone {
    fn default() -> Self {
        LoggerTimeZone::Utc
    }
}
