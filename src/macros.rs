//! Logging macros for ergonomic message formatting.
//!
//! Each macro takes a console, an optional `tag = ...,` and then
//! `format!`-style arguments. They evaluate to `true` when the line was
//! admitted.
//!
//! # Examples
//!
//! ```
//! use rust_console_filter::prelude::*;
//! use rust_console_filter::{log, warning};
//!
//! let sink = MemorySink::new();
//! let mut console = Console::builder()
//!     .show_timestamps(false)
//!     .sink(sink.clone())
//!     .build();
//!
//! let port = 8080;
//! log!(console, "Server listening on port {}", port);
//! warning!(console, tag = "db", "Pool at {}%", 90);
//!
//! assert_eq!(
//!     sink.texts(),
//!     vec!["[Log] Server listening on port 8080", "[Warning][db] Pool at 90%"]
//! );
//! ```

/// Log at an explicit severity.
///
/// # Examples
///
/// ```
/// # use rust_console_filter::prelude::*;
/// # let mut console = Console::builder().sink(MemorySink::new()).build();
/// use rust_console_filter::log_at;
/// log_at!(console, Severity::Warning, "Simple message");
/// log_at!(console, Severity::Log, tag = "io", "Read {} bytes", 512);
/// ```
#[macro_export]
macro_rules! log_at {
    ($console:expr, $severity:expr, tag = $tag:expr, $($arg:tt)+) => {
        $console.log_at($severity, $crate::LogCall::new(format!($($arg)+)).tag($tag))
    };
    ($console:expr, $severity:expr, $($arg:tt)+) => {
        $console.log_at($severity, $crate::LogCall::new(format!($($arg)+)))
    };
}

/// Log a debug-severity message.
///
/// # Examples
///
/// ```
/// # use rust_console_filter::prelude::*;
/// # let mut console = Console::builder().sink(MemorySink::new()).build();
/// use rust_console_filter::debug;
/// debug!(console, "Debug information");
/// debug!(console, tag = "cache", "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($console:expr, $($arg:tt)+) => {
        $crate::log_at!($console, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log a log-severity message.
///
/// # Examples
///
/// ```
/// # use rust_console_filter::prelude::*;
/// # let mut console = Console::builder().sink(MemorySink::new()).build();
/// use rust_console_filter::log;
/// log!(console, "Application started");
/// log!(console, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! log {
    ($console:expr, $($arg:tt)+) => {
        $crate::log_at!($console, $crate::Severity::Log, $($arg)+)
    };
}

/// Log a warning-severity message.
///
/// # Examples
///
/// ```
/// # use rust_console_filter::prelude::*;
/// # let mut console = Console::builder().sink(MemorySink::new()).build();
/// use rust_console_filter::warning;
/// warning!(console, "Low disk space");
/// warning!(console, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($console:expr, $($arg:tt)+) => {
        $crate::log_at!($console, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-severity message, followed by its stack-trace record.
///
/// # Examples
///
/// ```
/// # use rust_console_filter::prelude::*;
/// # let mut console = Console::builder().sink(MemorySink::new()).build();
/// use rust_console_filter::error;
/// error!(console, "Failed to connect to database");
/// error!(console, tag = "db", "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! error {
    ($console:expr, $($arg:tt)+) => {
        $crate::log_at!($console, $crate::Severity::Error, $($arg)+)
    };
}
