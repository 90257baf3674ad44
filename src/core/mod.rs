//! Core console types and the admission pipeline

pub mod call;
pub mod config;
pub mod console;
pub mod duplicate;
pub mod error;
pub mod formatter;
pub mod level_gate;
pub mod metrics;
pub mod pipeline;
pub mod quick_tags;
pub mod severity;
pub mod sink;
pub mod tag_filter;
pub mod timestamp;

pub use call::{message_preview, trace_line, LogCall, TRACE_PREVIEW_CHARS};
pub use config::{ConsoleConfig, DEFAULT_NOTICE_PREFIX};
pub use console::{Console, ConsoleBuilder};
pub use duplicate::{
    DuplicateConfig, DuplicateSuppressor, DEFAULT_DUPLICATE_WINDOW, MIN_DUPLICATE_WINDOW,
};
pub use error::{ConsoleError, Result};
pub use formatter::{FormattedRecord, MessageFormatter};
pub use level_gate::LevelGate;
pub use metrics::ConsoleMetrics;
pub use pipeline::{Admission, AdmissionPipeline, Rejection};
pub use quick_tags::{QuickTags, Tier};
pub use severity::Severity;
pub use sink::{Channel, OutputSink, SinkRecord};
pub use tag_filter::{ExclusionControl, TagFilter, TagSet};
pub use timestamp::TimestampStyle;
