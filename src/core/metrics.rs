//! Write metrics for the fan-out
//!
//! Counts records that reached every destination and records that failed
//! part-way through.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters kept by the fan-out writer
///
/// # Example
///
/// ```
/// use tiered_logger::WriteMetrics;
///
/// let metrics = WriteMetrics::new();
/// metrics.record_written();
/// metrics.record_failed();
///
/// assert_eq!(metrics.records_written(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug, Default)]
pub struct WriteMetrics {
    records_written: AtomicU64,
    write_failures: AtomicU64,
}

impl WriteMetrics {
    pub const fn new() -> Self {
        Self {
            records_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_written(&self) -> u64 {
        self.records_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) {
        self.records_written.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_failed(&self) {
        self.write_failures.fetch_add(1, Ordering::Relaxed);
    }
}
