//! Standard output appender implementation

use crate::core::{Appender, AppenderCore, LogLevel, Result};
use crate::pattern::Formatter;
use std::io::Write;
use std::sync::Arc;

/// Writes rendered events to standard output, flushing after every event.
///
/// Each event is written while holding the stdout lock, so lines from
/// concurrent threads never interleave.
pub struct StdoutAppender {
    core: AppenderCore,
    use_colors: bool,
}

impl StdoutAppender {
    pub fn new() -> Self {
        Self {
            core: AppenderCore::default(),
            use_colors: false,
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
    ///
    /// # Examples
    ///
    /// ```
    /// use pattern_logger::appenders::StdoutAppender;
    /// use pattern_logger::Appender;
    ///
    /// let appender = StdoutAppender::new().with_pattern("%d{%H:%M:%S} %-5p %m%n");
    /// assert_eq!(appender.formatter().unwrap().pattern(), "%d{%H:%M:%S} %-5p %m%n");
    /// ```
    #[must_use]
    pub fn with_pattern(self, pattern: &str) -> Self {
        self.with_formatter(Arc::new(Formatter::new(pattern)))
    }

    /// Color each line by its level
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[cfg(feature = "console")]
    fn colorize(level: LogLevel, text: &str) -> String {
        use colored::Colorize;

        // Keep the terminator outside the escape sequence.
        let body = text.trim_end_matches(['\r', '\n']);
        let terminator = &text[body.len()..];
        format!("{}{}", body.color(level.color_code()), terminator)
    }

    #[cfg(not(feature = "console"))]
    fn colorize(_level: LogLevel, text: &str) -> String {
        text.to_string()
    }
}

impl Default for StdoutAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for StdoutAppender {
    fn core(&self) -> &AppenderCore {
        &self.core
    }

    fn write(&self, level: LogLevel, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        if self.use_colors {
            stdout.write_all(Self::colorize(level, text).as_bytes())?;
        } else {
            stdout.write_all(text.as_bytes())?;
        }
        stdout.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stdout"
    }
}
