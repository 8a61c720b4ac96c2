//! Log level definitions

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Severity of a log event.
///
/// Levels are totally ordered by their numeric value; a threshold admits
/// every level greater than or equal to itself. `Unknown` is the sentinel
/// produced by parsing unrecognized text or out-of-range numbers, and sorts
/// below every real level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[derive(Default)]
pub enum LogLevel {
    Unknown = 0,
    #[default]
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl LogLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Unknown => "UNKNOW",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Convert a raw numeric level; anything outside `0..=5` is `Unknown`.
    pub fn from_u8(raw: u8) -> Self {
        match raw {
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            5 => LogLevel::Fatal,
            _ => LogLevel::Unknown,
        }
    }

    /// Case-sensitive parse of a canonical level name.
    ///
    /// Never fails: unrecognized text yields [`LogLevel::Unknown`].
    ///
    /// ```
    /// use pattern_logger::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("WARN"), LogLevel::Warn);
    /// assert_eq!(LogLevel::parse("warn"), LogLevel::Unknown);
    /// assert_eq!(LogLevel::parse("banana"), LogLevel::Unknown);
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "DEBUG" => LogLevel::Debug,
            "INFO" => LogLevel::Info,
            "WARN" => LogLevel::Warn,
            "ERROR" => LogLevel::Error,
            "FATAL" => LogLevel::Fatal,
            _ => LogLevel::Unknown,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Unknown => BrightBlack,
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal => BrightRed,
        }
    }
}

/// Name of a raw numeric level, `"UNKNOW"` when out of range.
pub fn level_name(raw: u8) -> &'static str {
    LogLevel::from_u8(raw).to_str()
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LogLevel::parse(s))
    }
}

impl From<String> for LogLevel {
    fn from(s: String) -> Self {
        LogLevel::parse(&s)
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.to_str().to_string()
    }
}
