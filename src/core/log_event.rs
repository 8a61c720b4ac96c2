//! Log event structure

use super::log_level::LogLevel;
use std::cell::{Cell, RefCell};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

static NEXT_THREAD_ID: AtomicU32 = AtomicU32::new(1);
static PROCESS_START: OnceLock<Instant> = OnceLock::new();

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: Cell<u32> = const { Cell::new(0) };
    static THREAD_NAME_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Small per-thread integer id, assigned on first use and stable afterwards.
pub fn current_thread_id() -> u32 {
    THREAD_ID_CACHE.with(|cache| {
        if cache.get() == 0 {
            cache.set(NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed));
        }
        cache.get()
    })
}

/// Name of the current thread, empty for unnamed threads.
pub fn current_thread_name() -> String {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().unwrap_or_default().to_string())
            .clone()
    })
}

/// Milliseconds since the first call into this function in the process.
pub fn elapsed_ms() -> u64 {
    let start = PROCESS_START.get_or_init(Instant::now);
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

pub fn now_epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// Immutable snapshot of a single log occurrence.
///
/// Built once per log call through [`LogEventBuilder`] and only read
/// afterwards by loggers, appenders and formatters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    logger_name: Arc<str>,
    level: LogLevel,
    file: String,
    line: i32,
    elapsed_ms: u64,
    thread_id: u32,
    fiber_id: u32,
    timestamp_ms: u64,
    thread_name: String,
    message: String,
}

impl LogEvent {
    /// Start an event for `logger_name`, capturing the calling thread and clock.
    pub fn builder(logger_name: impl Into<Arc<str>>, level: LogLevel) -> LogEventBuilder {
        LogEventBuilder::new(logger_name, level)
    }

    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> i32 {
        self.line
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn thread_id(&self) -> u32 {
        self.thread_id
    }

    pub fn fiber_id(&self) -> u32 {
        self.fiber_id
    }

    /// Wall-clock time of the event in milliseconds since the Unix epoch.
    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Builder for [`LogEvent`].
///
/// Thread and clock fields are captured at construction and may be
/// overridden; the message body is accumulated through [`message_mut`]
/// (which supports `write!`) or replaced with [`message`].
///
/// [`message_mut`]: LogEventBuilder::message_mut
/// [`message`]: LogEventBuilder::message
///
/// # Example
///
/// ```
/// use pattern_logger::{LogEvent, LogLevel};
/// use std::fmt::Write;
///
/// let mut builder = LogEvent::builder("root", LogLevel::Info).location("main.rs", 7);
/// write!(builder.message_mut(), "listening on {}", 8080).unwrap();
/// let event = builder.build();
///
/// assert_eq!(event.message(), "listening on 8080");
/// assert_eq!(event.line(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct LogEventBuilder {
    event: LogEvent,
}

impl LogEventBuilder {
    pub fn new(logger_name: impl Into<Arc<str>>, level: LogLevel) -> Self {
        Self {
            event: LogEvent {
                logger_name: logger_name.into(),
                level,
                file: String::new(),
                line: 0,
                elapsed_ms: elapsed_ms(),
                thread_id: current_thread_id(),
                fiber_id: 0,
                timestamp_ms: now_epoch_ms(),
                thread_name: current_thread_name(),
                message: String::new(),
            },
        }
    }

    #[must_use]
    pub fn location(mut self, file: impl Into<String>, line: i32) -> Self {
        self.event.file = file.into();
        self.event.line = line;
        self
    }

    #[must_use]
    pub fn elapsed_ms(mut self, elapsed_ms: u64) -> Self {
        self.event.elapsed_ms = elapsed_ms;
        self
    }

    #[must_use]
    pub fn thread(mut self, thread_id: u32, thread_name: impl Into<String>) -> Self {
        self.event.thread_id = thread_id;
        self.event.thread_name = thread_name.into();
        self
    }

    #[must_use]
    pub fn fiber_id(mut self, fiber_id: u32) -> Self {
        self.event.fiber_id = fiber_id;
        self
    }

    #[must_use]
    pub fn timestamp_ms(mut self, timestamp_ms: u64) -> Self {
        self.event.timestamp_ms = timestamp_ms;
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.event.message = message.into();
        self
    }

    /// Mutable access to the message body, for stream-style construction.
    pub fn message_mut(&mut self) -> &mut String {
        &mut self.event.message
    }

    pub fn build(self) -> LogEvent {
        self.event
    }
}
