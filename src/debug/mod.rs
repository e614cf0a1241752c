// SPDX-License-Identifier: Unlicense

//! Debug logging through the `log` facade.
//!
//! The firmware supplies a character sink (a trace buffer or a debug port)
//! and installs a [`Logger`] over it. Verbosity is set per module by
//! [`LEVELS`].

use crate::util::locked::Locked;

use core::fmt::Write;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

#[cfg(test)]
pub mod unit_test_logging;

/// Per-module verbosity, matched against the end of the log target.
///
/// Later entries win.
pub const LEVELS: [(&str, Level); 3] = [
    ("boot", Level::Debug),
    ("clk", Level::Debug),
    ("interrupt", Level::Info),
];

/// Most verbose level logged for `target`.
pub fn level_for(target: &str) -> Level {
    LEVELS.iter().fold(Level::Trace, |base, (suffix, level)| {
        if target.ends_with(suffix) {
            *level
        } else {
            base
        }
    })
}

/// Logger writing one line per record to a shared sink.
pub struct Logger<W> {
    sink: Locked<W>,
}

impl<W> Logger<W> {
    /// Log to `sink`.
    pub const fn new(sink: W) -> Self {
        Self {
            sink: Locked::new(sink),
        }
    }

    /// The sink, locked.
    pub fn sink(&self) -> spin::MutexGuard<W> {
        self.sink.lock()
    }
}

impl<W: Write + Send> log::Log for Logger<W> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            const BUFFER: [&str; 6] = ["", "!", "*", " ", "  ", "  "];
            let mut sink = self.sink.lock();
            writeln!(
                sink,
                "{:5} [{:>30} {:3}] {}{}",
                record.level(),
                record.target().trim_start_matches("libplatform::"),
                record.line().unwrap_or(0),
                BUFFER[record.level() as usize],
                record.args()
            )
            .unwrap_or(());
        }
    }

    fn flush(&self) {}
}

/// Install `logger` as the global logger.
pub fn init<W: Write + Send>(logger: &'static Logger<W>) -> Result<(), SetLoggerError> {
    log::set_logger(logger).map(|()| log::set_max_level(LevelFilter::Trace))
}
