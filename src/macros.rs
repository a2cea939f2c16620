//! Formatting macro for logger handles.
//!
//! # Examples
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
//!     .build()
//!     .unwrap();
//!
//! let user_id = 42;
//! logf!(logs.warn(), "user {} exceeded quota", user_id).unwrap();
//! assert_eq!(sink.contents(), "WARN: user 42 exceeded quota\n");
//! ```

/// Format and write one line to a [`Logger`](crate::Logger).
///
/// Expands to [`Logger::print_fmt`](crate::Logger::print_fmt), so the
/// reported file and line are those of the macro call.
#[macro_export]
macro_rules! logf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.print_fmt(format_args!($($arg)+))
    };
}
