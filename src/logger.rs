//! Minimal stderr logger for binaries and tests built on this crate.
//!
//! The library itself only emits `trace!` records when narrowing loses
//! information in a way callers may care about (flushed subnormals, quieted
//! signaling NaNs).
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::time::SystemTime;

/// Environment variable read by [`init`], e.g. `BFLOAT_LOG=trace`.
pub const LOG_ENV: &str = "BFLOAT_LOG";

pub struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    let timestamp = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let location = match (record.file(), record.line()) {
        (Some(file), Some(line)) => format!("{}:{}", file, line),
        (Some(file), None) => file.to_string(),
        (None, _) => String::from("unknown location"),
    };

    format!(
        "[{timestamp}][{level}][{target}][{location}] {message}",
        timestamp = timestamp,
        level = record.level(),
        target = record.target(),
        location = location,
        message = record.args()
    )
}

/// Level named by `value`, falling back to `Warn` for missing or unknown names.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Installs [`SimpleLogger`] with the level taken from `BFLOAT_LOG`.
pub fn init() -> Result<(), SetLoggerError> {
    let level = level_from(std::env::var(LOG_ENV).ok().as_deref());
    init_with_level(level)
}

pub fn init_with_level(level: LevelFilter) -> Result<(), SetLoggerError> {
    static LOGGER: SimpleLogger = SimpleLogger;

    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}
