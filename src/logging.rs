#![cfg(feature = "std")]

//! Minimal logger for the console game.
//!
//! Game messages own stdout, so log lines go to stderr and only records from
//! this crate are shown. The level comes from `SKIRMISH_LOG`.

use std::env;
use log::{self, LevelFilter, Metadata, Record};

const LOG_ENV: &str = "SKIRMISH_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with("skirmish")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // target is the engine module, e.g. `skirmish::engine::grid`
            eprintln!("{:<5} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger. Unset or unparsable `SKIRMISH_LOG` means `warn`,
/// which keeps rejected human shots visible and everything else quiet.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
