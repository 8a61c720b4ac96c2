//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod log_event;
pub mod log_level;
pub mod logger;
pub mod metrics;

pub use appender::{Appender, AppenderCore};
pub use error::{LoggerError, Result};
pub use log_event::{
    current_thread_id, current_thread_name, elapsed_ms, now_epoch_ms, LogEvent, LogEventBuilder,
};
pub use log_level::{level_name, LogLevel};
pub use logger::{Logger, LoggerBuilder, ROOT_LOGGER_NAME};
pub use metrics::LoggerMetrics;
