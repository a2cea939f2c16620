//! Writer chain: fan-out plus the decorators that wrap it
//!
//! A record is one complete, newline-terminated log line. Decorators prepend
//! metadata and pass a single record down; the fan-out duplicates it to every
//! destination.

use super::error::{LoggerError, Result};
use super::metrics::WriteMetrics;
use super::timestamp::TimestampFormat;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// A byte sink handed to the fan-out
pub type Destination = Box<dyn Write + Send>;

/// Accepts one formatted record at a time
pub trait LogWriter: Send + Sync {
    fn write_record(&self, record: &[u8]) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

impl<W: LogWriter + ?Sized> LogWriter for Arc<W> {
    fn write_record(&self, record: &[u8]) -> Result<()> {
        (**self).write_record(record)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

/// Duplicates every record to all destinations, in configured order.
///
/// The destination list is locked for the whole record, so records written
/// from different threads never interleave. The first failing destination
/// ends the write; destinations after it do not see that record.
pub struct FanOut {
    destinations: Mutex<Vec<Destination>>,
    metrics: Arc<WriteMetrics>,
}

impl FanOut {
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self {
            destinations: Mutex::new(destinations),
            metrics: Arc::new(WriteMetrics::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.destinations.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn metrics(&self) -> Arc<WriteMetrics> {
        Arc::clone(&self.metrics)
    }
}

impl LogWriter for FanOut {
    fn write_record(&self, record: &[u8]) -> Result<()> {
        let mut destinations = self.destinations.lock();
        for (index, destination) in destinations.iter_mut().enumerate() {
            if let Err(e) = destination.write_all(record) {
                self.metrics.record_failed();
                return Err(LoggerError::destination(index, e));
            }
        }
        self.metrics.record_written();
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let mut destinations = self.destinations.lock();
        for (index, destination) in destinations.iter_mut().enumerate() {
            destination
                .flush()
                .map_err(|e| LoggerError::destination(index, e))?;
        }
        Ok(())
    }
}

/// Prepends `<timestamp> ` (current UTC time) to every record.
///
/// The clock is read and the record passed on under one lock, so records
/// reach the destinations in timestamp order.
pub struct TimestampWriter<W> {
    inner: W,
    format: TimestampFormat,
    order: Mutex<()>,
}

impl<W: LogWriter> TimestampWriter<W> {
    pub fn new(inner: W, format: TimestampFormat) -> Self {
        Self {
            inner,
            format,
            order: Mutex::new(()),
        }
    }
}

impl<W: LogWriter> LogWriter for TimestampWriter<W> {
    fn write_record(&self, record: &[u8]) -> Result<()> {
        let _order = self.order.lock();
        let timestamp = self.format.now();
        let mut stamped = Vec::with_capacity(timestamp.len() + 1 + record.len());
        stamped.extend_from_slice(timestamp.as_bytes());
        stamped.push(b' ');
        stamped.extend_from_slice(record);
        self.inner.write_record(&stamped)
    }

    fn flush(&self) -> Result<()> {
        self.inner.flush()
    }
}
