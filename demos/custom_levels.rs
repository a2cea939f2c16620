//! Custom severity levels example
//!
//! Demonstrates inserting levels into the ladder, fan-out to a file and the
//! console, and loading format options from JSON.
//!
//! Run with: cargo run --example custom_levels

use tiered_logger::prelude::*;
use tiered_logger::Destination;

fn main() -> Result<()> {
    println!("=== Tiered Logger - Custom Levels Example ===\n");

    let log_path = std::env::temp_dir().join("tiered_logger_custom_levels.log");

    let options = FormatOptions::from_json(
        r#"{ "timestamp_format": "%H:%M:%S", "show_location": false, "color": "auto" }"#,
    )?;

    let destinations: Vec<Destination> = vec![
        Box::new(ConsoleSink::stdout()),
        Box::new(FileSink::open(&log_path)?),
    ];

    let logs = LogSystem::builder()
        .with_destinations(destinations)
        .with_format_options(options)
        .with_additional_level_above("FATAL", "ERROR")
        .with_additional_level_below("NOTICE", "WARN")
        .with_additional_level_below("VERBOSE", "DEBUG")
        .with_threshold("NOTICE")
        .build()?;

    println!("1. Ladder, highest priority first:");
    for level in logs.levels() {
        let state = if logs.is_live(level)? { "live" } else { "muted" };
        println!("   {:<8} {}", level, state);
    }

    println!("\n2. Logging at every level:");
    for level in logs.levels() {
        logs.logger(level)?.print(format!("{} message", level))?;
    }

    println!("\n3. Unknown levels are reported, not ignored:");
    match logs.logger("AUDIT") {
        Ok(_) => println!("   unexpected logger for AUDIT"),
        Err(e) => println!("   {}", e),
    }

    logs.flush()?;
    println!("\nLog file written to {}", log_path.display());
    println!(
        "Records written: {}, failures: {}",
        logs.metrics().records_written(),
        logs.metrics().write_failures()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
