//! Console metrics for observability
//!
//! Counts admission outcomes per gate, sink failures and emitted
//! stack-trace records.

use std::sync::atomic::{AtomicU64, Ordering};

/// Admission and output counters
///
/// # Example
///
/// ```
/// use rust_console_filter::ConsoleMetrics;
///
/// let metrics = ConsoleMetrics::new();
/// metrics.record_admitted();
/// metrics.record_rejected_by_tag();
///
/// assert_eq!(metrics.admitted(), 1);
/// assert_eq!(metrics.rejected(), 1);
/// assert_eq!(metrics.rejection_rate(), 50.0);
/// ```
#[derive(Debug)]
pub struct ConsoleMetrics {
    admitted: AtomicU64,
    rejected_by_tag: AtomicU64,
    rejected_by_level: AtomicU64,
    suppressed_duplicates: AtomicU64,
    sink_failures: AtomicU64,
    traces_emitted: AtomicU64,
}

impl ConsoleMetrics {
    pub const fn new() -> Self {
        Self {
            admitted: AtomicU64::new(0),
            rejected_by_tag: AtomicU64::new(0),
            rejected_by_level: AtomicU64::new(0),
            suppressed_duplicates: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
            traces_emitted: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn admitted(&self) -> u64 {
        self.admitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rejected_by_tag(&self) -> u64 {
        self.rejected_by_tag.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rejected_by_level(&self) -> u64 {
        self.rejected_by_level.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_duplicates(&self) -> u64 {
        self.suppressed_duplicates.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_failures(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn traces_emitted(&self) -> u64 {
        self.traces_emitted.load(Ordering::Relaxed)
    }

    /// Total calls refused by any gate
    pub fn rejected(&self) -> u64 {
        self.rejected_by_tag() + self.rejected_by_level() + self.suppressed_duplicates()
    }

    #[inline]
    pub fn record_admitted(&self) -> u64 {
        self.admitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rejected_by_tag(&self) -> u64 {
        self.rejected_by_tag.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rejected_by_level(&self) -> u64 {
        self.rejected_by_level.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed_duplicate(&self) -> u64 {
        self.suppressed_duplicates.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_failure(&self) -> u64 {
        self.sink_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_trace(&self) -> u64 {
        self.traces_emitted.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of evaluated calls that were refused, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been evaluated.
    pub fn rejection_rate(&self) -> f64 {
        let rejected = self.rejected() as f64;
        let total = self.admitted() as f64 + rejected;
        if total == 0.0 {
            0.0
        } else {
            (rejected / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.admitted.store(0, Ordering::Relaxed);
        self.rejected_by_tag.store(0, Ordering::Relaxed);
        self.rejected_by_level.store(0, Ordering::Relaxed);
        self.suppressed_duplicates.store(0, Ordering::Relaxed);
        self.sink_failures.store(0, Ordering::Relaxed);
        self.traces_emitted.store(0, Ordering::Relaxed);
    }
}

impl Default for ConsoleMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ConsoleMetrics {
    /// Snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            admitted: AtomicU64::new(self.admitted()),
            rejected_by_tag: AtomicU64::new(self.rejected_by_tag()),
            rejected_by_level: AtomicU64::new(self.rejected_by_level()),
            suppressed_duplicates: AtomicU64::new(self.suppressed_duplicates()),
            sink_failures: AtomicU64::new(self.sink_failures()),
            traces_emitted: AtomicU64::new(self.traces_emitted()),
        }
    }
}
