// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Browser console backend for the [`log`] facade.

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Writes [`log`] records to the browser console, picking the console method
/// that matches the record level.
pub struct Console;

static CONSOLE: Console = Console;

/// Install [`Console`] as the global logger and set the max level.
///
/// Only the first call installs the logger, later calls just change the level.
pub fn init(level: LevelFilter) {
    // Fails if a logger is already set, in which case we keep it.
    let _ = log::set_logger(&CONSOLE);

    log::set_max_level(level);
}

impl Log for Console {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_record(record);

        match record.level() {
            Level::Error => gloo_console::error!(line),
            Level::Warn => gloo_console::warn!(line),
            Level::Info => gloo_console::info!(line),
            Level::Debug | Level::Trace => gloo_console::debug!(line),
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!("[{} {}] {}", record.level(), record.target(), record.args())
}
