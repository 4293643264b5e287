//! Diagnostics routed through the `log` facade.
//!
//! Verbose notes are gated by [`Config::debug`]; warnings and errors are
//! always emitted. In the browser the facade is backed by `console_log`.

use std::fmt;

use crate::config::Config;

pub const TARGET: &str = "folio";

#[derive(Debug, Clone, Copy)]
pub struct Diagnostics {
    debug: bool,
}

impl Diagnostics {
    pub fn new(config: Config) -> Self {
        Self { debug: config.debug }
    }

    pub fn is_verbose(self) -> bool {
        self.debug
    }

    /// Verbose binding/filter note; dropped when debug is off.
    pub fn note(self, args: fmt::Arguments<'_>) {
        if self.debug {
            log::info!(target: TARGET, "{args}");
        }
    }

    pub fn warn(self, args: fmt::Arguments<'_>) {
        log::warn!(target: TARGET, "{args}");
    }

    pub fn error(self, args: fmt::Arguments<'_>) {
        log::error!(target: TARGET, "{args}");
    }
}

/// Console log level for the given config.
pub fn level_for(config: Config) -> log::Level {
    if config.debug { log::Level::Debug } else { log::Level::Warn }
}

/// Install the browser console logger and panic hook.
#[cfg(feature = "hydrate")]
pub fn install(config: Config) {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(level_for(config)) {
        web_sys::console::warn_1(&format!("[folio] logger already installed: {err}").into());
    }
}

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;
