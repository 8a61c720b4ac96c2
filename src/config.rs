//! Declarative logger configuration
//!
//! A logger and its appenders can be described in JSON:
//!
//! ```json
//! {
//!   "name": "app",
//!   "level": "INFO",
//!   "appenders": [
//!     { "kind": "stdout", "pattern": "%d [%p] %c: %m%n" },
//!     { "kind": "file", "path": "/var/log/app.log", "level": "ERROR", "utc": true }
//!   ]
//! }
//! ```
//!
//! Levels use the canonical upper-case names; unrecognized names become
//! `UNKNOW`, which admits every event. An appender without a `pattern`
//! writes the bare message body.

use crate::appenders::{FileAppender, StdoutAppender};
use crate::core::{Appender, LogLevel, Logger, LoggerError, Result, ROOT_LOGGER_NAME};
use crate::pattern::{DateZone, Formatter, DEFAULT_PATTERN};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppenderKind {
    Stdout,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppenderConfig {
    pub kind: AppenderKind,
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Render `%d` in UTC rather than local time
    #[serde(default)]
    pub utc: bool,
    /// Required for `file` appenders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub colors: bool,
    #[serde(default)]
    pub file_lock: bool,
}

impl AppenderConfig {
    pub fn stdout() -> Self {
        Self {
            kind: AppenderKind::Stdout,
            level: LogLevel::default(),
            pattern: None,
            utc: false,
            path: None,
            colors: false,
            file_lock: false,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: AppenderKind::File,
            path: Some(path.into()),
            ..Self::stdout()
        }
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    fn formatter(&self) -> Option<Arc<Formatter>> {
        let zone = if self.utc { DateZone::Utc } else { DateZone::Local };
        self.pattern
            .as_deref()
            .map(|pattern| Arc::new(Formatter::with_zone(pattern, zone)))
    }

    /// Instantiate the appender described by this entry.
    ///
    /// `index` is only used to point at the offending entry in errors.
    pub fn build(&self, index: usize) -> Result<Arc<dyn Appender>> {
        let appender: Arc<dyn Appender> = match self.kind {
            AppenderKind::Stdout => {
                #[cfg(feature = "console")]
                let appender = StdoutAppender::new().with_colors(self.colors);
                #[cfg(not(feature = "console"))]
                let appender = StdoutAppender::new();
                Arc::new(appender)
            }
            AppenderKind::File => {
                let path = self.path.as_ref().ok_or_else(|| {
                    LoggerError::config(format!("appenders[{}]", index), "file appender requires 'path'")
                })?;
                #[cfg(feature = "file")]
                let appender = FileAppender::new(path)?.with_file_lock(self.file_lock);
                #[cfg(not(feature = "file"))]
                let appender = FileAppender::new(path)?;
                Arc::new(appender)
            }
        };

        appender.set_level(self.level);
        appender.set_formatter(self.formatter());
        Ok(appender)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub appenders: Vec<AppenderConfig>,
}

fn default_name() -> String {
    ROOT_LOGGER_NAME.to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            level: LogLevel::default(),
            appenders: Vec::new(),
        }
    }
}

impl LoggerConfig {
    pub fn default_pattern() -> &'static str {
        DEFAULT_PATTERN
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the logger and every configured appender, in order.
    pub fn build(&self) -> Result<Logger> {
        let mut builder = Logger::builder(self.name.as_str()).level(self.level);
        for (index, appender) in self.appenders.iter().enumerate() {
            builder = builder.appender(appender.build(index)?);
        }
        Ok(builder.build())
    }
}
