use std::io::Write;
use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::{PROGRAM_LOG_LEVEL, PROGRAM_NAME};

/// Logger that writes one line per record to stderr.
///
/// Listing output owns stdout, so log lines never go there.
pub struct StderrLogger {
    level: Level,
}

impl StderrLogger {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    fn render(&self, record: &Record<'_>) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        format!(
            "{} {} [{}] {}",
            timestamp,
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.render(record);
        // A closed stderr leaves nowhere to report to.
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Parse a log level setting. Unset, unparsable and `off` values fall back to `warn`.
pub fn parse_level(value: Option<&str>) -> Level {
    value
        .and_then(|s| s.trim().parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(Level::Warn)
}

fn level_from_env() -> Level {
    parse_level(std::env::var(PROGRAM_LOG_LEVEL).ok().as_deref())
}

/// Install the process-wide logger, reading the level from the environment.
pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(level_from_env())
}

pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

    // Only the first call installs; later calls keep the original level so
    // the logger and log::max_level never disagree.
    let first_call = LOGGER.get().is_none();
    let logger = LOGGER.get_or_init(|| StderrLogger::new(level));

    if first_call {
        log::set_logger(logger)?;
        log::set_max_level(logger.level().to_level_filter());
        log::debug!(target: PROGRAM_NAME, "logger installed at {}", logger.level());
    }

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
