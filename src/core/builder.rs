//! Fluent configuration and one-time assembly of a [`LogSystem`]

use super::{
    config::{ColorMode, FormatOptions},
    error::{LoggerError, Result},
    ladder::{InsertPolicy, LevelInsertion, SeverityLadder},
    log_level::{color_for, severity_tag},
    log_system::LogSystem,
    logger::Logger,
    threshold::{self, Gate, ThresholdSource},
    timestamp::TimestampFormat,
    writer::{Destination, FanOut, LogWriter, TimestampWriter},
};
use crate::sinks::{ConsoleSink, DiscardSink};
use std::io::Write;
use std::sync::Arc;

/// Builder for constructing a [`LogSystem`] with a fluent API
///
/// Defaults: standard output as the only destination, ISO 8601 timestamps with
/// milliseconds, file/line and severity tag shown, color decided automatically,
/// threshold read from `LOG_LEVEL`.
///
/// # Example
/// ```
/// use tiered_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logs = LogSystem::builder()
///     .with_destination(sink.clone())
///     .with_timestamp_format("%H:%M:%S")
///     .with_additional_level_above("NOTICE", "INFO")
///     .with_additional_level_below("VERBOSE", "INFO")
///     .with_threshold("INFO")
///     .build()
///     .unwrap();
///
/// assert!(logs.is_live("NOTICE").unwrap());
/// assert!(!logs.is_live("VERBOSE").unwrap());
/// ```
pub struct LogSystemBuilder {
    destinations: Vec<Destination>,
    /// Set while the stock console is still the only destination
    default_console: Option<ConsoleSink>,
    options: FormatOptions,
    insertions: Vec<LevelInsertion>,
    insert_policy: InsertPolicy,
    threshold: ThresholdSource,
}

impl LogSystemBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            destinations: vec![Box::new(ConsoleSink::stdout())],
            default_console: Some(ConsoleSink::stdout()),
            options: FormatOptions::default(),
            insertions: Vec::new(),
            insert_policy: InsertPolicy::default(),
            threshold: ThresholdSource::default(),
        }
    }

    /// Replace all destinations with `destination`
    #[must_use = "builder methods return a new value"]
    pub fn with_destination<W: Write + Send + 'static>(mut self, destination: W) -> Self {
        self.destinations = vec![Box::new(destination)];
        self.default_console = None;
        self
    }

    /// Replace all destinations with `destinations`
    #[must_use = "builder methods return a new value"]
    pub fn with_destinations<I>(mut self, destinations: I) -> Self
    where
        I: IntoIterator<Item = Destination>,
    {
        self.destinations = destinations.into_iter().collect();
        self.default_console = None;
        self
    }

    /// Append `destination` to the current destinations
    #[must_use = "builder methods return a new value"]
    pub fn with_additional_destination<W: Write + Send + 'static>(mut self, destination: W) -> Self {
        self.destinations.push(Box::new(destination));
        self.default_console = None;
        self
    }

    /// Append `destinations` to the current destinations
    #[must_use = "builder methods return a new value"]
    pub fn with_additional_destinations<I>(mut self, destinations: I) -> Self
    where
        I: IntoIterator<Item = Destination>,
    {
        self.destinations.extend(destinations);
        self.default_console = None;
        self
    }

    /// Set the timestamp format. Plain strings become custom strftime patterns
    /// and are used verbatim.
    #[must_use = "builder methods return a new value"]
    pub fn with_timestamp_format(mut self, format: impl Into<TimestampFormat>) -> Self {
        self.options.timestamp_format = format.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_timestamp_enabled(mut self, enabled: bool) -> Self {
        self.options.show_timestamp = enabled;
        self
    }

    /// Show the caller's file base name and line
    #[must_use = "builder methods return a new value"]
    pub fn with_file_name_enabled(mut self, enabled: bool) -> Self {
        self.options.show_location = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_severity_enabled(mut self, enabled: bool) -> Self {
        self.options.show_severity = enabled;
        self
    }

    /// Force color on or off, overriding automatic detection
    #[must_use = "builder methods return a new value"]
    pub fn with_color_enabled(mut self, enabled: bool) -> Self {
        self.options.color = ColorMode::from(enabled);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.options.color = mode;
        self
    }

    /// Replace all format toggles at once, e.g. with options loaded from JSON
    #[must_use = "builder methods return a new value"]
    pub fn with_format_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Add `level` with a priority just above `reference`
    #[must_use = "builder methods return a new value"]
    pub fn with_additional_level_above(
        mut self,
        level: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        self.insertions.push(LevelInsertion::above(level, reference));
        self
    }

    /// Add `level` with a priority just below `reference`
    #[must_use = "builder methods return a new value"]
    pub fn with_additional_level_below(
        mut self,
        level: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        self.insertions.push(LevelInsertion::below(level, reference));
        self
    }

    /// How insertions against unknown references or duplicate names are handled.
    /// Default is [`InsertPolicy::Strict`].
    #[must_use = "builder methods return a new value"]
    pub fn with_insert_policy(mut self, policy: InsertPolicy) -> Self {
        self.insert_policy = policy;
        self
    }

    /// Use a fixed threshold instead of the environment
    #[must_use = "builder methods return a new value"]
    pub fn with_threshold(mut self, level: impl Into<String>) -> Self {
        self.threshold = ThresholdSource::Fixed(level.into());
        self
    }

    /// Read the threshold from `var` at build time
    #[must_use = "builder methods return a new value"]
    pub fn with_threshold_env(mut self, var: impl Into<String>) -> Self {
        self.threshold = ThresholdSource::Env(var.into());
        self
    }

    /// Assemble the log system.
    ///
    /// Applies ladder insertions in call order, resolves the threshold once,
    /// then binds every level to either the decorated fan-out or a discard sink.
    /// Colored tags are rendered here, per level.
    pub fn build(self) -> Result<LogSystem> {
        if self.destinations.is_empty() {
            return Err(LoggerError::config(
                "destinations",
                "at least one destination is required",
            ));
        }

        let mut ladder = SeverityLadder::new();
        for insertion in &self.insertions {
            ladder.apply(insertion, self.insert_policy)?;
        }

        let threshold = self.threshold.resolve(&ladder);
        let gates = threshold::partition(&ladder, &threshold);

        let options = self.options;
        let use_color =
            options.show_severity && options.color.resolve(self.default_console.as_ref());

        let fan_out = FanOut::new(self.destinations);
        let metrics = fan_out.metrics();
        let shared: Arc<dyn LogWriter> = if options.show_timestamp {
            Arc::new(TimestampWriter::new(fan_out, options.timestamp_format))
        } else {
            Arc::new(fan_out)
        };
        let discard: Arc<dyn LogWriter> = Arc::new(DiscardSink);

        let loggers = gates
            .into_iter()
            .map(|(level, gate)| {
                let tag = if options.show_severity {
                    severity_tag(&level, use_color.then(|| color_for(&level)))
                } else {
                    String::new()
                };

                let writer = match gate {
                    Gate::Muted => Arc::clone(&discard),
                    Gate::Live => Arc::clone(&shared),
                };

                Logger::new(&level, tag, options.show_location, gate, writer)
            })
            .collect();

        Ok(LogSystem::new(loggers, threshold, shared, metrics))
    }
}

impl Default for LogSystemBuilder {
    fn default() -> Self {
        Self::new()
    }
}
