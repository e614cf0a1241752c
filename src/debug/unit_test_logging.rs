// SPDX-License-Identifier: Unlicense

//! Log to stdout from unit tests.

extern crate std;
use log::{LevelFilter, Metadata, Record};
use std::sync::Once;

static START: Once = Once::new();
static LOGGER: PrintLogger = PrintLogger;
struct PrintLogger;

impl log::Log for PrintLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= super::level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        use std::{println, string::String};

        if self.enabled(record.metadata()) {
            println!(
                "{:5} [{:>30}:{:3}] {}",
                record.level(),
                record.target().chars().take(30).collect::<String>(),
                record.line().unwrap_or(0),
                record.args()
            );
        }
    }
    fn flush(&self) {}
}

/// Install the stdout logger once per test binary.
pub fn setup() {
    START.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
}
