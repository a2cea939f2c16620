//! In-memory sink for capturing output

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// A shared, growable byte buffer.
///
/// Clones share the same buffer, so one clone can be handed to a log system
/// while another reads back what was written.
///
/// # Example
///
/// ```
/// use tiered_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logs = LogSystem::builder()
///     .with_destination(sink.clone())
///     .with_timestamp_enabled(false)
///     .with_file_name_enabled(false)
///     .with_threshold("INFO")
///     .build()
///     .unwrap();
///
/// logs.info().print("ready").unwrap();
/// assert_eq!(sink.contents(), "INFO: ready\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured bytes, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
