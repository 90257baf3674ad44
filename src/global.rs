//! Process-wide default console
//!
//! A lazily created [`Console`] guarded by a mutex, for call sites that
//! would rather not thread a console through their code. The first use
//! installs a console with the default configuration writing to
//! stdout/stderr; call [`init`] before any logging to install your own.
//!
//! The lock is held while sinks run, so a sink must not log through this
//! module.
//!
//! ```
//! use rust_console_filter::global;
//! use rust_console_filter::{LogCall, Severity};
//!
//! global::set_minimum_severity(Severity::Warning);
//! global::exclude::add("chatty");
//!
//! global::log("not shown");
//! global::warning(LogCall::new("shown").tag("net"));
//! ```

use crate::core::{Console, LogCall, Severity};
use parking_lot::Mutex;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Mutex<Console>> = OnceLock::new();

fn global() -> &'static Mutex<Console> {
    GLOBAL.get_or_init(|| Mutex::new(Console::new()))
}

/// Install `console` as the process-wide console.
///
/// Returns `false` (and drops `console`) if one was already installed,
/// either by an earlier `init` or by a logging call.
pub fn init(console: Console) -> bool {
    GLOBAL.set(Mutex::new(console)).is_ok()
}

/// Run `f` with exclusive access to the process-wide console
pub fn with_console<R>(f: impl FnOnce(&mut Console) -> R) -> R {
    let mut console = global().lock();
    f(&mut console)
}

pub fn debug(call: impl Into<LogCall>) -> bool {
    with_console(|c| c.debug(call))
}

pub fn log(call: impl Into<LogCall>) -> bool {
    with_console(|c| c.log(call))
}

pub fn warning(call: impl Into<LogCall>) -> bool {
    with_console(|c| c.warning(call))
}

pub fn error(call: impl Into<LogCall>) -> bool {
    with_console(|c| c.error(call))
}

pub fn set_minimum_severity(severity: Severity) {
    with_console(|c| c.set_minimum_severity(severity));
}

pub fn set_show_timestamps(enabled: bool) {
    with_console(|c| c.set_show_timestamps(enabled));
}

pub fn set_duplicate_suppression(enabled: bool) {
    with_console(|c| c.set_duplicate_suppression(enabled));
}

/// Include (allow) list of the process-wide console
pub mod include {
    use super::with_console;

    pub fn add(tag: &str) {
        with_console(|c| c.add_include_tag(tag));
    }

    pub fn remove(tag: &str) {
        with_console(|c| c.remove_include_tag(tag));
    }

    pub fn clear() {
        with_console(|c| c.clear_include_tags());
    }

    pub fn list() -> Vec<String> {
        with_console(|c| c.include_tags())
    }
}

/// Exclude (deny) list of the process-wide console
pub mod exclude {
    use super::with_console;

    pub fn add(tag: &str) {
        with_console(|c| c.add_exclude_tag(tag));
    }

    pub fn remove(tag: &str) {
        with_console(|c| c.remove_exclude_tag(tag));
    }

    pub fn clear() {
        with_console(|c| c.clear_exclude_tags());
    }

    pub fn list() -> Vec<String> {
        with_console(|c| c.exclude_tags())
    }
}
