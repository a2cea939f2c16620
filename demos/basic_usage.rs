//! Basic log system usage example
//!
//! Demonstrates the default console setup, the built-in levels and the
//! format toggles.
//!
//! Run with: LOG_LEVEL=DEBUG cargo run --example basic_usage

use tiered_logger::logf;
use tiered_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Tiered Logger - Basic Usage Example ===\n");

    // Threshold comes from LOG_LEVEL, falling back to INFO
    let logs = LogSystem::builder().build()?;
    println!("1. Default console output (threshold: {}):", logs.threshold());

    logs.error().print("This is an error message")?;
    logs.warn().print("This is a warning message")?;
    logs.info().print("This is an info message")?;
    logs.debug().print("This is a debug message")?;
    logs.trace().print("This is a trace message")?;

    println!("\n2. Formatted messages:");
    let user = "alice";
    logf!(logs.info(), "user {} logged in after {} attempts", user, 2)?;

    println!("\n3. Only the severity tag, fixed threshold of WARN:");
    let terse = LogSystem::builder()
        .with_timestamp_enabled(false)
        .with_file_name_enabled(false)
        .with_threshold("WARN")
        .build()?;
    terse.warn().print("Warning message (visible)")?;
    terse.info().print("Info message (hidden)")?;

    println!("\n4. Unix millisecond timestamps on stderr:");
    let stamped = LogSystem::builder()
        .with_destination(ConsoleSink::stderr())
        .with_timestamp_format(TimestampFormat::UnixMillis)
        .with_threshold("INFO")
        .build()?;
    stamped.info().print("Timestamped message")?;
    stamped.flush()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
