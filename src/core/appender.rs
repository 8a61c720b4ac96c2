//! Appender trait for log output destinations

use super::{error::Result, log_event::LogEvent, log_level::LogLevel};
use crate::pattern::{Formatter, LINE_ENDING};
use parking_lot::RwLock;
use std::sync::Arc;

/// Level threshold and formatter shared by every appender implementation.
///
/// Both settings may be changed while the appender is attached to loggers
/// on other threads.
#[derive(Debug, Default)]
pub struct AppenderCore {
    level: RwLock<LogLevel>,
    formatter: RwLock<Option<Arc<Formatter>>>,
}

impl AppenderCore {
    pub fn new(level: LogLevel, formatter: Option<Arc<Formatter>>) -> Self {
        Self {
            level: RwLock::new(level),
            formatter: RwLock::new(formatter),
        }
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    pub fn formatter(&self) -> Option<Arc<Formatter>> {
        self.formatter.read().clone()
    }

    pub fn set_formatter(&self, formatter: Option<Arc<Formatter>>) {
        *self.formatter.write() = formatter;
    }

    pub fn admits(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Format `event`, or fall back to the raw message plus a line terminator
    /// when no formatter is configured.
    pub fn render(&self, event: &LogEvent) -> String {
        match self.formatter.read().as_deref() {
            Some(formatter) => formatter.format(event),
            None => {
                let mut line = String::with_capacity(event.message().len() + LINE_ENDING.len());
                line.push_str(event.message());
                line.push_str(LINE_ENDING);
                line
            }
        }
    }
}

/// A sink that filters events by level and writes their rendered text.
///
/// Appenders are shared as `Arc<dyn Appender>` between loggers and the code
/// configuring them, so every method takes `&self`; implementations guard
/// their output handle with a lock.
pub trait Appender: Send + Sync {
    fn core(&self) -> &AppenderCore;

    /// Write already-rendered text to the sink.
    fn write(&self, level: LogLevel, text: &str) -> Result<()>;

    fn flush(&self) -> Result<()>;

    fn name(&self) -> &str;

    /// Render and write `event` if `level` passes this appender's threshold.
    fn log(&self, level: LogLevel, event: &LogEvent) -> Result<()> {
        let core = self.core();
        if !core.admits(level) {
            return Ok(());
        }
        let text = core.render(event);
        self.write(level, &text)
    }

    fn level(&self) -> LogLevel {
        self.core().level()
    }

    fn set_level(&self, level: LogLevel) {
        self.core().set_level(level);
    }

    fn formatter(&self) -> Option<Arc<Formatter>> {
        self.core().formatter()
    }

    fn set_formatter(&self, formatter: Option<Arc<Formatter>>) {
        self.core().set_formatter(formatter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::CaptureAppender as Capture;

    fn event(message: &str) -> LogEvent {
        LogEvent::builder("root", LogLevel::Info).message(message).build()
    }

    #[test]
    fn test_default_threshold_is_debug() {
        let appender = Capture::default();
        assert_eq!(appender.level(), LogLevel::Debug);
    }

    #[test]
    fn test_missing_formatter_writes_raw_message() {
        let appender = Capture::default();
        appender.log(LogLevel::Info, &event("x")).unwrap();
        assert_eq!(appender.lines(), vec![format!("x{}", LINE_ENDING)]);
    }

    #[test]
    fn test_threshold_filters() {
        let appender = Capture::default();
        appender.set_level(LogLevel::Warn);

        appender.log(LogLevel::Info, &event("dropped")).unwrap();
        appender.log(LogLevel::Warn, &event("kept")).unwrap();

        assert_eq!(appender.lines().len(), 1);
    }

    #[test]
    fn test_formatter_is_used_when_set() {
        let appender = Capture::default();
        appender.set_formatter(Some(Arc::new(Formatter::new("<%m>"))));
        appender.log(LogLevel::Info, &event("body")).unwrap();
        assert_eq!(appender.lines(), vec!["<body>".to_string()]);

        appender.set_formatter(None);
        assert!(appender.formatter().is_none());
    }
}
