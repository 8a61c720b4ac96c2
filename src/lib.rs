//! # Pattern Logger
//!
//! A synchronous Rust logging library: named loggers route leveled events to
//! appenders, which render them through printf-style patterns.
//!
//! ## Features
//!
//! - **Pattern formatting**: `%d{%H:%M:%S} [%-5p] %c: %m%n`, compiled once per formatter
//! - **Multiple Appenders**: standard output, files, and custom appenders
//! - **Thread Safe**: loggers, appenders and formatters can be shared across threads
//! - **Never crashes the host**: malformed patterns degrade to literal text, sink failures are counted
//!
//! ## Example
//!
//! ```
//! use pattern_logger::prelude::*;
//! use std::sync::Arc;
//!
//! let logger = Logger::new("app");
//! logger.add_appender(Arc::new(
//!     StdoutAppender::new()
//!         .with_level(LogLevel::Info)
//!         .with_pattern(DEFAULT_PATTERN),
//! ));
//!
//! pattern_logger::info!(logger, "listening on {}", 8080);
//! ```

pub mod appenders;
pub mod config;
pub mod core;
pub mod macros;
pub mod pattern;

#[cfg(test)]
mod test_util;

pub mod prelude {
    pub use crate::appenders::{FileAppender, StdoutAppender};
    pub use crate::config::{AppenderConfig, AppenderKind, LoggerConfig};
    pub use crate::core::{
        Appender, AppenderCore, LogEvent, LogEventBuilder, LogLevel, Logger, LoggerBuilder,
        LoggerError, LoggerMetrics, Result,
    };
    pub use crate::pattern::{DateZone, Formatter, DEFAULT_PATTERN};
}

pub use self::appenders::{FileAppender, StdoutAppender};
pub use self::config::{AppenderConfig, AppenderKind, LoggerConfig};
pub use self::core::{
    level_name, Appender, AppenderCore, LogEvent, LogEventBuilder, LogLevel, Logger,
    LoggerBuilder, LoggerError, LoggerMetrics, Result, ROOT_LOGGER_NAME,
};
pub use self::pattern::{DateZone, FormatSpec, Formatter, Renderer, DEFAULT_PATTERN};
