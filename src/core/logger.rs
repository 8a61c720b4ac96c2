//! Main logger implementation

use super::{
    appender::Appender,
    error::Result,
    log_event::{LogEvent, LogEventBuilder},
    log_level::LogLevel,
    metrics::LoggerMetrics,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// Name used by [`Logger::default`].
pub const ROOT_LOGGER_NAME: &str = "root";

/// A named entry point that filters events by level and fans them out to
/// its appenders.
///
/// Dispatch is synchronous on the caller's thread. Appenders are invoked in
/// the order they were added, each applying its own threshold after the
/// logger's.
pub struct Logger {
    name: Arc<str>,
    level: RwLock<LogLevel>,
    appenders: RwLock<Vec<Arc<dyn Appender>>>,
    metrics: LoggerMetrics,
}

impl Logger {
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            level: RwLock::new(LogLevel::Debug),
            appenders: RwLock::new(Vec::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    /// Whether an event at `level` passes this logger's own threshold.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    pub fn add_appender(&self, appender: Arc<dyn Appender>) {
        self.appenders.write().push(appender);
    }

    /// Detach `appender`, compared by identity. Returns whether it was attached.
    pub fn del_appender(&self, appender: &Arc<dyn Appender>) -> bool {
        let mut appenders = self.appenders.write();
        let before = appenders.len();
        appenders.retain(|attached| !Arc::ptr_eq(attached, appender));
        appenders.len() != before
    }

    pub fn clear_appenders(&self) {
        self.appenders.write().clear();
    }

    /// Snapshot of the attached appenders in dispatch order.
    pub fn appenders(&self) -> Vec<Arc<dyn Appender>> {
        self.appenders.read().clone()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Start an event owned by this logger, pre-filled with thread and clock data.
    pub fn event(&self, level: LogLevel) -> LogEventBuilder {
        LogEvent::builder(Arc::clone(&self.name), level)
    }

    /// Deliver `event` at `level` to every attached appender.
    ///
    /// Sink failures are never returned to the caller; they are counted in
    /// [`metrics`](Self::metrics) instead.
    pub fn log(&self, level: LogLevel, event: &LogEvent) {
        if !self.enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        let appenders = self.appenders.read().clone();
        if self.dispatch(&appenders, level, event) {
            self.metrics.record_logged();
        }
    }

    /// Returns true when no appender failed.
    ///
    /// Each appender call is isolated with `catch_unwind` so a panicking sink
    /// does not starve the appenders after it.
    fn dispatch(&self, appenders: &[Arc<dyn Appender>], level: LogLevel, event: &LogEvent) -> bool {
        let mut ok = true;

        for (idx, appender) in appenders.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.log(level, event)
            }));

            match result {
                Ok(Ok(())) => {}
                Ok(Err(_)) => {
                    self.metrics.record_failed_write();
                    ok = false;
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} ({}) panicked: {}. \
                         Other appenders continue to function.",
                        idx,
                        appender.name(),
                        panic_msg
                    );
                    self.metrics.record_failed_write();
                    ok = false;
                }
            }
        }

        ok
    }

    pub fn debug(&self, event: &LogEvent) {
        self.log(LogLevel::Debug, event);
    }

    pub fn info(&self, event: &LogEvent) {
        self.log(LogLevel::Info, event);
    }

    pub fn warn(&self, event: &LogEvent) {
        self.log(LogLevel::Warn, event);
    }

    pub fn error(&self, event: &LogEvent) {
        self.log(LogLevel::Error, event);
    }

    pub fn fatal(&self, event: &LogEvent) {
        self.log(LogLevel::Fatal, event);
    }

    /// Flush every appender, returning the first error after trying them all.
    pub fn flush(&self) -> Result<()> {
        let mut first_err = None;
        for appender in self.appenders.read().iter() {
            if let Err(e) = appender.flush() {
                self.metrics.record_failed_write();
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(ROOT_LOGGER_NAME)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("appenders", &self.appenders.read().len())
            .finish()
    }
}

/// Builder for creating a Logger with a fluent API
///
/// # Example
/// ```
/// use pattern_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder("app")
///     .level(LogLevel::Info)
///     .appender(Arc::new(StdoutAppender::new()))
///     .build();
///
/// assert_eq!(logger.name(), "app");
/// assert_eq!(logger.appenders().len(), 1);
/// ```
pub struct LoggerBuilder {
    name: Arc<str>,
    level: LogLevel,
    appenders: Vec<Arc<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder with the Debug threshold and no appenders
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            level: LogLevel::Debug,
            appenders: Vec::new(),
        }
    }

    /// Set the logger's own threshold
    #[must_use]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Attach an appender; appenders are dispatched in the order added
    #[must_use]
    pub fn appender(mut self, appender: Arc<dyn Appender>) -> Self {
        self.appenders.push(appender);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = Logger::new(self.name);
        logger.set_level(self.level);
        for appender in self.appenders {
            logger.add_appender(appender);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new(ROOT_LOGGER_NAME)
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder(name: impl Into<Arc<str>>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AppenderCore, LoggerError};
    use crate::test_util::CaptureAppender as Capture;
    use parking_lot::Mutex;

    struct Failing;

    impl Appender for Failing {
        fn core(&self) -> &AppenderCore {
            static CORE: std::sync::OnceLock<AppenderCore> = std::sync::OnceLock::new();
            CORE.get_or_init(AppenderCore::default)
        }

        fn write(&self, _level: LogLevel, _text: &str) -> Result<()> {
            Err(LoggerError::writer("sink unavailable"))
        }

        fn flush(&self) -> Result<()> {
            Err(LoggerError::writer("sink unavailable"))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct Panicking;

    impl Appender for Panicking {
        fn core(&self) -> &AppenderCore {
            static CORE: std::sync::OnceLock<AppenderCore> = std::sync::OnceLock::new();
            CORE.get_or_init(AppenderCore::default)
        }

        fn write(&self, _level: LogLevel, _text: &str) -> Result<()> {
            panic!("appender exploded");
        }

        fn flush(&self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    fn event(logger: &Logger, message: &str) -> LogEvent {
        logger.event(LogLevel::Info).message(message).build()
    }

    #[test]
    fn test_builder_basic() {
        let logger = Logger::builder("svc").level(LogLevel::Warn).build();
        assert_eq!(logger.name(), "svc");
        assert_eq!(logger.level(), LogLevel::Warn);
        assert!(logger.appenders().is_empty());
    }

    #[test]
    fn test_builder_default() {
        let logger = LoggerBuilder::default().build();
        assert_eq!(logger.name(), ROOT_LOGGER_NAME);
        assert_eq!(logger.level(), LogLevel::Debug);
    }

    #[test]
    fn test_event_carries_logger_name() {
        let logger = Logger::new("db");
        assert_eq!(logger.event(LogLevel::Info).build().logger_name(), "db");
    }

    #[test]
    fn test_logger_threshold_filters_first() {
        let logger = Logger::new("root");
        let capture = Arc::new(Capture::default());
        logger.add_appender(capture.clone());
        logger.set_level(LogLevel::Error);

        logger.warn(&event(&logger, "below"));
        logger.error(&event(&logger, "at"));

        assert_eq!(capture.lines().len(), 1);
        assert_eq!(logger.metrics().filtered_count(), 1);
        assert_eq!(logger.metrics().total_logged(), 1);
    }

    #[test]
    fn test_appenders_run_in_attachment_order() {
        let logger = Logger::new("root");
        let order = Arc::new(Mutex::new(Vec::new()));

        struct Tagged {
            core: AppenderCore,
            tag: &'static str,
            order: Arc<Mutex<Vec<&'static str>>>,
        }

        impl Appender for Tagged {
            fn core(&self) -> &AppenderCore {
                &self.core
            }
            fn write(&self, _level: LogLevel, _text: &str) -> Result<()> {
                self.order.lock().push(self.tag);
                Ok(())
            }
            fn flush(&self) -> Result<()> {
                Ok(())
            }
            fn name(&self) -> &str {
                self.tag
            }
        }

        for tag in ["first", "second", "third"] {
            logger.add_appender(Arc::new(Tagged {
                core: AppenderCore::default(),
                tag,
                order: Arc::clone(&order),
            }));
        }

        logger.info(&event(&logger, "x"));
        assert_eq!(*order.lock(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_del_appender_by_identity() {
        let logger = Logger::new("root");
        let kept: Arc<dyn Appender> = Arc::new(Capture::default());
        let removed: Arc<dyn Appender> = Arc::new(Capture::default());
        logger.add_appender(Arc::clone(&kept));
        logger.add_appender(Arc::clone(&removed));

        assert!(logger.del_appender(&removed));
        assert!(!logger.del_appender(&removed));

        let remaining = logger.appenders();
        assert_eq!(remaining.len(), 1);
        assert!(Arc::ptr_eq(&remaining[0], &kept));
    }

    #[test]
    fn test_failed_write_is_silent_and_counted() {
        let logger = Logger::new("root");
        let capture = Arc::new(Capture::default());
        logger.add_appender(Arc::new(Failing));
        logger.add_appender(capture.clone());

        logger.info(&event(&logger, "still delivered"));

        assert_eq!(capture.lines().len(), 1);
        assert_eq!(logger.metrics().failed_write_count(), 1);
        assert_eq!(logger.metrics().total_logged(), 0);
    }

    #[test]
    fn test_panicking_appender_is_isolated() {
        let logger = Logger::new("root");
        let capture = Arc::new(Capture::default());
        logger.add_appender(Arc::new(Panicking));
        logger.add_appender(capture.clone());

        logger.info(&event(&logger, "survives"));

        assert_eq!(capture.lines().len(), 1);
        assert_eq!(logger.metrics().failed_write_count(), 1);
    }

    #[test]
    fn test_appender_may_reenter_its_logger() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Weak;

        struct Reentrant {
            core: AppenderCore,
            logger: Weak<Logger>,
            capture: Arc<Capture>,
            entered: AtomicBool,
        }

        impl Appender for Reentrant {
            fn core(&self) -> &AppenderCore {
                &self.core
            }
            fn write(&self, _level: LogLevel, _text: &str) -> Result<()> {
                if self.entered.swap(true, Ordering::SeqCst) {
                    return Ok(());
                }
                if let Some(logger) = self.logger.upgrade() {
                    logger.add_appender(self.capture.clone());
                    logger.warn(&logger.event(LogLevel::Warn).message("inner").build());
                }
                Ok(())
            }
            fn flush(&self) -> Result<()> {
                Ok(())
            }
            fn name(&self) -> &str {
                "reentrant"
            }
        }

        let logger = Arc::new(Logger::new("root"));
        let capture = Arc::new(Capture::default());
        logger.add_appender(Arc::new(Reentrant {
            core: AppenderCore::default(),
            logger: Arc::downgrade(&logger),
            capture: Arc::clone(&capture),
            entered: AtomicBool::new(false),
        }));

        logger.info(&event(&logger, "outer"));

        assert_eq!(capture.lines(), vec![format!("inner{}", crate::pattern::LINE_ENDING)]);
        assert_eq!(logger.appenders().len(), 2);
        assert_eq!(logger.metrics().total_logged(), 2);
    }

    #[test]
    fn test_flush_reports_first_error() {
        let logger = Logger::new("root");
        logger.add_appender(Arc::new(Capture::default()));
        assert!(logger.flush().is_ok());

        logger.add_appender(Arc::new(Failing));
        assert!(matches!(logger.flush(), Err(LoggerError::WriterError(_))));
    }
}
