//! Output sink implementations

pub mod console;
pub mod memory;

pub use console::ConsoleSink;
pub use memory::MemorySink;

pub use crate::core::OutputSink;
