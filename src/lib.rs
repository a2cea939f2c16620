//! # Tiered Logger
//!
//! A configurable logging facade built around named severity levels.
//!
//! ## Features
//!
//! - **Severity ladder**: ERROR, WARN, INFO, DEBUG, TRACE, plus custom levels
//!   inserted above or below any existing one
//! - **Threshold gate**: levels below the threshold (`LOG_LEVEL` by default)
//!   are wired to a discard sink once, at build time
//! - **Decorated lines**: `[timestamp] [file:line:] [LEVEL:] message`, each
//!   part optional, the severity tag optionally colored
//! - **Fan-out**: every line goes to all configured destinations
//!
//! ## Example
//!
//! ```
//! use tiered_logger::prelude::*;
//! use tiered_logger::logf;
//!
//! let sink = MemorySink::new();
//! let logs = LogSystem::builder()
//!     .with_destination(sink.clone())
//!     .with_timestamp_enabled(false)
//!     .with_file_name_enabled(false)
//!     .with_threshold("INFO")
//!     .build()?;
//!
//! logf!(logs.info(), "listening on port {}", 8080)?;
//! logs.debug().print("not shown")?;
//!
//! assert_eq!(sink.contents(), "INFO: listening on port 8080\n");
//! # Ok::<(), tiered_logger::LoggerError>(())
//! ```
//!
//! ## Concurrency
//!
//! Writes are synchronous. The fan-out holds a lock for the duration of each
//! line, so lines written from several threads never interleave. The clock is
//! read under the timestamp decorator's lock, so lines also land in timestamp
//! order.

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        ColorMode, FormatOptions, InsertPolicy, LogLevel, LogSystem, LogSystemBuilder, Logger,
        LoggerError, Result, TimestampFormat,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, MemorySink};
}

pub use core::{
    ColorMode, Destination, FormatOptions, Gate, InsertPolicy, LogLevel, LogSystem,
    LogSystemBuilder, LogWriter, Logger, LoggerError, Result, SeverityLadder, ThresholdSource,
    TimestampFormat, WriteMetrics, DEBUG, DEFAULT_THRESHOLD, ERROR, INFO, THRESHOLD_ENV_VAR,
    TRACE, WARN,
};
pub use sinks::{ConsoleSink, DiscardSink, FileSink, MemorySink};
