//! Basic logger usage example
//!
//! Demonstrates a stdout appender with a pattern, and two-stage level filtering.
//!
//! Run with: cargo run --example basic_usage

use pattern_logger::prelude::*;
use pattern_logger::{debug, error, fatal, info, warn};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Pattern Logger - Basic Usage Example ===\n");

    let logger = Logger::new("basic");

    let stdout = Arc::new(
        StdoutAppender::new()
            .with_pattern("%d{%H:%M:%S} [%-5p] %c %f:%l - %m%n")
            .with_colors(true),
    );
    logger.add_appender(stdout.clone());

    println!("1. Logging at different levels:");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    warn!(logger, "This is a warning message");
    error!(logger, "This is an error message");
    fatal!(logger, "This is a fatal message");

    println!("\n2. Logger threshold set to INFO - debug won't show:");
    logger.set_level(LogLevel::Info);
    debug!(logger, "Debug message (hidden)");
    info!(logger, "Info message (visible)");

    println!("\n3. Appender threshold set to ERROR - the logger admits WARN, the appender drops it:");
    stdout.set_level(LogLevel::Error);
    warn!(logger, "Warning message (hidden by appender)");
    error!(logger, "Error message (visible)");

    println!("\n4. No formatter - the raw message is written:");
    stdout.set_formatter(None);
    error!(logger, "just the message body");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
