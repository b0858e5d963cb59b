//! `log` backend that writes through the host's log import.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Where formatted log lines end up; in the guest this is `EngineLog`.
pub type Sink = fn(&str);

pub struct HostLogger {
    sink: Sink,
    level: LevelFilter,
}

impl HostLogger {
    pub fn new(sink: Sink, level: LevelFilter) -> Self {
        HostLogger { sink, level }
    }

    pub fn format(record: &Record) -> String {
        format!("[{}] {}: {}", record.level(), record.target(), record.args())
    }
}

impl Log for HostLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            (self.sink)(&HostLogger::format(record));
        }
    }

    fn flush(&self) {}
}

/// Installs a `HostLogger` as the global logger. Fails if a logger is
/// already set, which happens when the host calls setup more than once.
pub fn init(sink: Sink, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(HostLogger::new(sink, level)))?;
    log::set_max_level(level);
    Ok(())
}
