//! Logger setup for the binary.
//!
//! Records go to stderr as UCI `info string` lines so they never corrupt the
//! protocol on stdout. The logger itself passes everything up to `Debug`; the
//! effective level is `log::max_level`, which `debug on`/`debug off` move at runtime.

use env_logger::{Builder, DEFAULT_FILTER_ENV};
use log::LevelFilter;
use std::io::Write;

/// Level for `--verbose` (or UCI `debug on`) versus normal running
pub fn level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Logger that lets debug records through and formats them as info strings
pub fn builder() -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Debug)
        .format(|buf, record| writeln!(buf, "info string {}", record.args()));
    builder
}

/// Install the global logger. `RUST_LOG`, when set, overrides `verbose`.
pub fn init(verbose: bool) {
    let from_env = std::env::var_os(DEFAULT_FILTER_ENV).is_some();

    let mut builder = builder();
    builder.parse_default_env();
    builder.init();

    if !from_env {
        log::set_max_level(level(verbose));
    }
}
