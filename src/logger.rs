//! Minimal stderr logger for the command-line tools.

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: Logger = Logger;

pub struct Logger;

pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// `-q` silences everything, each `-v` raises the default `warn` level.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let ch = match record.level() {
                Level::Info => '*',
                Level::Warn => 'W',
                Level::Error => 'E',
                Level::Debug => 'D',
                Level::Trace => 'T',
            };
            let _ = writeln!(std::io::stderr().lock(), "[{}] {}", ch, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
