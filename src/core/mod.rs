//! Core logger types and traits

pub mod builder;
pub mod config;
pub mod error;
pub mod ladder;
pub mod log_level;
pub mod log_system;
pub mod logger;
pub mod metrics;
pub mod threshold;
pub mod timestamp;
pub mod writer;

pub use builder::LogSystemBuilder;
pub use config::{ColorMode, FormatOptions};
pub use error::{LoggerError, Result};
pub use ladder::{InsertPolicy, LevelInsertion, Placement, SeverityLadder};
pub use log_level::{LogLevel, DEBUG, DEFAULT_THRESHOLD, ERROR, INFO, TRACE, WARN};
pub use log_system::LogSystem;
pub use logger::Logger;
pub use metrics::WriteMetrics;
pub use threshold::{Gate, ThresholdSource, THRESHOLD_ENV_VAR};
pub use timestamp::TimestampFormat;
pub use writer::{Destination, FanOut, LogWriter, TimestampWriter};
