//! Discard sink backing muted levels

use crate::core::{LogWriter, Result};
use std::io::{self, Write};

/// Accepts every write and keeps nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl Write for DiscardSink {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogWriter for DiscardSink {
    #[inline]
    fn write_record(&self, _record: &[u8]) -> Result<()> {
        Ok(())
    }
}
