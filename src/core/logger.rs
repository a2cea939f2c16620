//! Per-level logger handle

use super::{error::Result, threshold::Gate, writer::LogWriter};
use std::fmt::{self, Write};
use std::panic::Location;
use std::sync::Arc;

/// A logger bound to one ladder level.
///
/// The severity tag (colored or not) is baked in when the handle is created. Muted handles are
/// wired to a discard writer and go through the same call path as live ones.
///
/// Handles are cheap to clone and can be moved across threads.
#[derive(Clone)]
pub struct Logger {
    level: Arc<str>,
    tag: Arc<str>,
    show_location: bool,
    gate: Gate,
    writer: Arc<dyn LogWriter>,
}

impl Logger {
    pub(crate) fn new(
        level: &str,
        tag: String,
        show_location: bool,
        gate: Gate,
        writer: Arc<dyn LogWriter>,
    ) -> Self {
        Self {
            level: Arc::from(level),
            tag: Arc::from(tag),
            show_location,
            gate,
            writer,
        }
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    /// Whether lines written here reach the destinations
    pub fn is_live(&self) -> bool {
        self.gate.is_live()
    }

    /// Write one line as `[file:line: ]LEVEL: message`. A trailing newline is
    /// added unless the message ends with one.
    ///
    /// Fails with [`LoggerError::FormatError`](crate::LoggerError::FormatError)
    /// if `message`'s `Display` implementation fails; nothing is written then.
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
    ///     .with_threshold("INFO")
    ///     .build()
    ///     .unwrap();
    ///
    /// logs.logger("WARN").unwrap().print("disk almost full").unwrap();
    /// assert!(sink.contents().ends_with(": WARN: disk almost full\n"));
    /// ```
    #[track_caller]
    pub fn print(&self, message: impl fmt::Display) -> Result<()> {
        self.emit(Location::caller(), format_args!("{}", message))
    }

    /// Write one line from pre-built format arguments; see [`crate::logf`]
    #[track_caller]
    pub fn print_fmt(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(Location::caller(), args)
    }

    fn emit(&self, location: &Location<'_>, args: fmt::Arguments<'_>) -> Result<()> {
        let mut line = String::with_capacity(self.tag.len() + 64);
        if self.show_location {
            write!(line, "{}:{}: ", short_file(location.file()), location.line())?;
        }
        line.push_str(&self.tag);
        line.write_fmt(args)?;
        if !line.ends_with('\n') {
            line.push('\n');
        }
        self.writer.write_record(line.as_bytes())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("gate", &self.gate)
            .field("show_location", &self.show_location)
            .finish_non_exhaustive()
    }
}

/// Base name of a source path, for either separator style
fn short_file(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}
