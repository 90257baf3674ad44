//! In-memory sink that captures records
//!
//! Clones share the same buffer, so a test can hand one clone to the
//! console and inspect the other.

use crate::core::{Channel, OutputSink, Result, SinkRecord};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<SinkRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<SinkRecord> {
        self.records.lock().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.text.clone()).collect()
    }

    pub fn on_channel(&self, channel: Channel) -> Vec<SinkRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.channel == channel)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl OutputSink for MemorySink {
    fn emit(&mut self, record: &SinkRecord) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
