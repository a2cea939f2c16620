//! The assembled, immutable log system

use super::{
    builder::LogSystemBuilder,
    error::{LoggerError, Result},
    log_level::{LogLevel, BUILTIN_LEVELS},
    logger::Logger,
    metrics::WriteMetrics,
    writer::LogWriter,
};
use std::collections::HashMap;
use std::sync::Arc;

/// One logger per ladder level, in ladder order.
///
/// Nothing here changes after assembly; share it by reference or wrap it in
/// an `Arc`.
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
///     .with_threshold("WARN")
///     .build()
///     .unwrap();
///
/// logs.warn().print("kept").unwrap();
/// logs.info().print("dropped").unwrap();
/// assert_eq!(sink.contents(), "WARN: kept\n");
/// ```
pub struct LogSystem {
    loggers: Vec<Logger>,
    index: HashMap<String, usize>,
    builtin: [usize; BUILTIN_LEVELS],
    threshold: String,
    writer: Arc<dyn LogWriter>,
    metrics: Arc<WriteMetrics>,
}

impl LogSystem {
    #[must_use]
    pub fn builder() -> LogSystemBuilder {
        LogSystemBuilder::new()
    }

    /// `loggers` must contain every built-in level
    pub(crate) fn new(
        loggers: Vec<Logger>,
        threshold: String,
        writer: Arc<dyn LogWriter>,
        metrics: Arc<WriteMetrics>,
    ) -> Self {
        let index: HashMap<String, usize> = loggers
            .iter()
            .enumerate()
            .map(|(position, logger)| (logger.level().to_string(), position))
            .collect();

        let mut builtin = [0; BUILTIN_LEVELS];
        for (slot, level) in builtin.iter_mut().zip(LogLevel::ALL) {
            *slot = index.get(level.to_str()).copied().unwrap_or_default();
        }

        Self {
            loggers,
            index,
            builtin,
            threshold,
            writer,
            metrics,
        }
    }

    /// Look up the logger for `level` by exact name
    pub fn logger(&self, level: &str) -> Result<&Logger> {
        self.index
            .get(level)
            .map(|&position| &self.loggers[position])
            .ok_or_else(|| LoggerError::unknown_level(level))
    }

    /// Logger of a built-in level. Built-in levels are always present.
    pub fn builtin(&self, level: LogLevel) -> &Logger {
        &self.loggers[self.builtin[level as usize]]
    }

    #[inline]
    pub fn error(&self) -> &Logger {
        self.builtin(LogLevel::Error)
    }

    #[inline]
    pub fn warn(&self) -> &Logger {
        self.builtin(LogLevel::Warn)
    }

    #[inline]
    pub fn info(&self) -> &Logger {
        self.builtin(LogLevel::Info)
    }

    #[inline]
    pub fn debug(&self) -> &Logger {
        self.builtin(LogLevel::Debug)
    }

    #[inline]
    pub fn trace(&self) -> &Logger {
        self.builtin(LogLevel::Trace)
    }

    /// Level names, highest priority first
    pub fn levels(&self) -> impl Iterator<Item = &str> {
        self.loggers.iter().map(Logger::level)
    }

    /// The threshold the gate was computed with
    pub fn threshold(&self) -> &str {
        &self.threshold
    }

    pub fn is_live(&self, level: &str) -> Result<bool> {
        Ok(self.logger(level)?.is_live())
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    /// Flush every destination
    pub fn flush(&self) -> Result<()> {
        self.writer.flush()
    }

    pub fn metrics(&self) -> &WriteMetrics {
        &self.metrics
    }
}

impl std::fmt::Debug for LogSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogSystem")
            .field("loggers", &self.loggers)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}
