//! File appender implementation

use crate::core::{Appender, AppenderCore, LogLevel, LoggerError, Result};
use crate::pattern::Formatter;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Appends rendered events to a file, flushing after every write.
///
/// The handle lives behind a mutex so each `write + flush` is serialized
/// when the appender is shared across threads. If opening fails the
/// appender stays usable: writes fail (and are counted by the logger) until
/// [`reopen`](FileAppender::reopen) succeeds.
pub struct FileAppender {
    core: AppenderCore,
    path: PathBuf,
    file: Mutex<Option<File>>,
    #[cfg(feature = "file")]
    use_lock: bool,
}

impl FileAppender {
    /// Open `path` in append mode, creating it if needed.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let appender = Self::detached(path);
        let file = appender.open()?;
        *appender.file.lock() = Some(file);
        Ok(appender)
    }

    /// Create the appender without opening the file yet.
    pub fn detached(path: impl Into<PathBuf>) -> Self {
        Self {
            core: AppenderCore::default(),
            path: path.into(),
            file: Mutex::new(None),
            #[cfg(feature = "file")]
            use_lock: false,
        }
    }

    /// Set the minimum level this appender accepts
    #[must_use]
    pub fn with_level(self, level: LogLevel) -> Self {
        self.core.set_level(level);
        self
    }

    #[must_use]
    pub fn with_formatter(self, formatter: Arc<Formatter>) -> Self {
        self.core.set_formatter(Some(formatter));
        self
    }

    /// Compile `pattern` into this appender's formatter
    #[must_use]
    pub fn with_pattern(self, pattern: &str) -> Self {
        self.with_formatter(Arc::new(Formatter::new(pattern)))
    }

    /// Hold an exclusive advisory lock on the file around every write
    ///
    /// Useful when several processes append to the same file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pattern_logger::appenders::FileAppender;
    ///
    /// let appender = FileAppender::new("/var/log/app.log")
    ///     .unwrap()
    ///     .with_file_lock(true);
    /// ```
    #[cfg(feature = "file")]
    #[must_use]
    pub fn with_file_lock(mut self, use_lock: bool) -> Self {
        self.use_lock = use_lock;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.file.lock().is_some()
    }

    /// Close any current handle and open the file again.
    ///
    /// Returns whether the file is open afterwards.
    pub fn reopen(&self) -> bool {
        let mut file = self.file.lock();
        *file = None;
        match self.open() {
            Ok(handle) => {
                *file = Some(handle);
                true
            }
            Err(_) => false,
        }
    }

    fn open(&self) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}' for append", self.path.display()),
                    e,
                )
            })
    }

    #[cfg(feature = "file")]
    fn write_locked(&self, file: &mut File, bytes: &[u8]) -> Result<()> {
        use fs2::FileExt;

        if !self.use_lock {
            file.write_all(bytes)?;
            return Ok(file.flush()?);
        }

        file.lock_exclusive()
            .map_err(|_| LoggerError::file_lock(self.path.display().to_string()))?;
        let result = file.write_all(bytes).and_then(|()| file.flush());
        let _ = file.unlock();
        Ok(result?)
    }

    #[cfg(not(feature = "file"))]
    fn write_locked(&self, file: &mut File, bytes: &[u8]) -> Result<()> {
        file.write_all(bytes)?;
        Ok(file.flush()?)
    }
}

impl Appender for FileAppender {
    fn core(&self) -> &AppenderCore {
        &self.core
    }

    fn write(&self, _level: LogLevel, text: &str) -> Result<()> {
        let mut guard = self.file.lock();
        let file = guard.as_mut().ok_or_else(|| {
            LoggerError::file_appender(self.path.display().to_string(), "file is not open")
        })?;
        self.write_locked(file, text.as_bytes())
    }

    fn flush(&self) -> Result<()> {
        if let Some(file) = self.file.lock().as_mut() {
            file.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogEvent;
    use tempfile::TempDir;

    fn event(message: &str) -> LogEvent {
        LogEvent::builder("root", LogLevel::Info).message(message).build()
    }

    #[test]
    fn test_appends_to_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "existing\n").unwrap();

        let appender = FileAppender::new(&path).unwrap().with_pattern("%p %m%n");
        appender.log(LogLevel::Info, &event("added")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("existing\nINFO added{}", crate::pattern::LINE_ENDING));
    }

    #[test]
    fn test_write_is_visible_without_explicit_flush() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let appender = FileAppender::new(&path).unwrap();

        appender.log(LogLevel::Info, &event("now")).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("now"));
    }

    #[test]
    fn test_open_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("app.log");

        assert!(matches!(
            FileAppender::new(&path),
            Err(LoggerError::IoOperation { .. })
        ));
    }

    #[test]
    fn test_failed_open_reports_file_appender_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("app.log");
        assert!(FileAppender::new(&path).is_err());

        let appender = FileAppender::detached(&path);
        assert!(!appender.reopen());
        match appender.log(LogLevel::Error, &event("lost")) {
            Err(LoggerError::FileAppenderError { path: failed, .. }) => {
                assert_eq!(failed, path.display().to_string());
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_detached_writes_fail_until_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("late.log");
        let appender = FileAppender::detached(&path);

        assert!(!appender.is_open());
        assert!(matches!(
            appender.log(LogLevel::Info, &event("lost")),
            Err(LoggerError::FileAppenderError { .. })
        ));

        assert!(appender.reopen());
        appender.log(LogLevel::Info, &event("kept")).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("kept"));
    }

    #[test]
    fn test_reopen_after_file_moved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let moved = dir.path().join("app.log.1");
        let appender = FileAppender::new(&path).unwrap();

        appender.log(LogLevel::Info, &event("before")).unwrap();
        std::fs::rename(&path, &moved).unwrap();
        assert!(appender.reopen());
        appender.log(LogLevel::Info, &event("after")).unwrap();

        assert!(std::fs::read_to_string(&moved).unwrap().starts_with("before"));
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("after"));
    }

    #[test]
    fn test_reopen_failure_returns_false() {
        let dir = TempDir::new().unwrap();
        let appender = FileAppender::detached(dir.path().join("nope").join("x.log"));
        assert!(!appender.reopen());
        assert!(!appender.is_open());
    }

    #[cfg(feature = "file")]
    #[test]
    fn test_locked_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("locked.log");
        let appender = FileAppender::new(&path).unwrap().with_file_lock(true);

        appender.log(LogLevel::Info, &event("one")).unwrap();
        appender.log(LogLevel::Info, &event("two")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().collect::<Vec<_>>(), vec!["one", "two"]);
    }
}
