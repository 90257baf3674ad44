//! # Rust Console Filter
//!
//! Console output filtering and formatting: every logging call passes an
//! admission pipeline before it is printed.
//!
//! ## Features
//!
//! - **Severity threshold**: Debug < Log < Warning < Error
//! - **Tag lists**: include (allow) list overriding an exclude (deny) list
//! - **Timestamps**: optional clock prefix on every line
//! - **Duplicate suppression**: opt-in window that collapses repeated messages
//! - **Tiered tags**: production/lite/full switches over the exclude list
//!
//! ```
//! use rust_console_filter::prelude::*;
//!
//! let sink = MemorySink::new();
//! let mut console = Console::builder()
//!     .show_timestamps(false)
//!     .sink(sink.clone())
//!     .build();
//!
//! console.log(LogCall::new("listening").tag("http"));
//! assert_eq!(sink.texts(), vec!["[Log][http] listening"]);
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Admission, AdmissionPipeline, Channel, Console, ConsoleBuilder, ConsoleConfig,
        ConsoleError, ConsoleMetrics, DuplicateConfig, DuplicateSuppressor, ExclusionControl,
        FormattedRecord, LevelGate, LogCall, MessageFormatter, OutputSink, QuickTags, Rejection,
        Result, Severity, SinkRecord, TagFilter, TagSet, Tier, TimestampStyle,
    };
    pub use crate::sinks::{ConsoleSink, MemorySink};
}

pub use crate::core::{
    Admission, AdmissionPipeline, Channel, Console, ConsoleBuilder, ConsoleConfig, ConsoleError,
    ConsoleMetrics, DuplicateConfig, DuplicateSuppressor, ExclusionControl, FormattedRecord,
    LevelGate, LogCall, MessageFormatter, OutputSink, QuickTags, Rejection, Result, Severity,
    SinkRecord, TagFilter, TagSet, Tier, TimestampStyle, DEFAULT_DUPLICATE_WINDOW,
    MIN_DUPLICATE_WINDOW,
};
pub use sinks::{ConsoleSink, MemorySink};
