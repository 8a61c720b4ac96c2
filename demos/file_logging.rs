//! File logging example
//!
//! Demonstrates logging to stdout and a file at the same time, with the file
//! configured from JSON.
//!
//! Run with: cargo run --example file_logging

use pattern_logger::prelude::*;
use pattern_logger::{info, warn};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Pattern Logger - File Logging Example ===\n");

    let config = LoggerConfig::from_json(
        r#"{
            "name": "app",
            "level": "DEBUG",
            "appenders": [
                { "kind": "file", "path": "application.log", "pattern": "%d [%p] %c (%t:%N) %r ms: %m%n" }
            ]
        }"#,
    )?;
    let logger = config.build()?;
    logger.add_appender(Arc::new(StdoutAppender::new().with_pattern(DEFAULT_PATTERN)));

    println!("1. Logging to both stdout and file:");
    info!(logger, "Application started");
    info!(logger, "Configuration loaded successfully");
    warn!(logger, "Using default settings for some options");

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        info!(logger, "Processing item {}/5", i);
        if i == 3 {
            warn!(logger, "Item 3 took longer than expected");
        }
    }

    println!("\n3. Reopening the file (e.g. after external rotation):");
    let file = FileAppender::detached("application.log").with_pattern("%m%n");
    println!("   reopen succeeded: {}", file.reopen());

    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
