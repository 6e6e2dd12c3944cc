use kumo_log::{LogField, LoggerConfig, LoggerTimeZone, StructuredLogger, build_logger};
use time::UtcOffset;

fn main() {
    // 1) Cloud logger: single-line JSON records enriched with the app
    //    identity, timestamps in UTC.
    let cloud = build_logger(LoggerConfig {
        level: "debug".to_string(),
        format: "cloud".to_string(),
        app_name: "quickstart".to_string(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        ..Default::default()
    })
    .expect("failed to build cloud logger");

    cloud.debug("connecting to upstream", &[LogField::new("endpoint", "db:5432")]);
    cloud.info("listening", &[LogField::new("port", 8080)]);
    cloud.error("request failed", &[LogField::new("status", 502)]);

    // 2) Local logger: human-readable lines at a fixed +09:00 offset,
    //    no identity enrichment.
    let local = build_logger(LoggerConfig {
        level: "info".to_string(),
        format: "local".to_string(),
        timezone: LoggerTimeZone::Fixed(UtcOffset::from_hms(9, 0, 0).expect("valid offset")),
        ..Default::default()
    })
    .expect("failed to build local logger");

    local.info("started", &[]);
    local.warn("cache miss ratio above threshold", &[LogField::new("ratio", 0.42)]);

    // 3) Misconfiguration degrades instead of failing: a warning lands on
    //    stderr and safe defaults apply.
    let fallback = build_logger(LoggerConfig {
        level: "verbose".to_string(),
        format: "plain".to_string(),
        app_name: "quickstart".to_string(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        ..Default::default()
    })
    .expect("fallback logger still builds");

    fallback.debug("suppressed by the info fallback", &[]);
    fallback.info("degraded but alive", &[]);
}
