//! Compiled pattern formatter

use super::parser::parse_with_zone;
use super::renderer::{DateZone, Renderer};
use crate::core::LogEvent;
use std::fmt::{self, Write};

/// Pattern used when none is configured.
pub const DEFAULT_PATTERN: &str = "%d{%Y-%m-%d %H:%M:%S} [%p] %c: %m%n";

/// Renders log events according to a pattern compiled once at construction.
///
/// A `Formatter` holds no per-event state, so one instance can be shared
/// across threads behind an `Arc`.
///
/// # Example
///
/// ```
/// use pattern_logger::{Formatter, LogEvent, LogLevel};
///
/// let formatter = Formatter::new("%p: %m%n");
/// let event = LogEvent::builder("root", LogLevel::Error)
///     .message("disk full")
///     .build();
///
/// assert_eq!(formatter.format(&event), "ERROR: disk full\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    pattern: String,
    zone: DateZone,
    renderers: Vec<Renderer>,
}

impl Formatter {
    /// Compile `pattern`, rendering dates in local time.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self::with_zone(pattern, DateZone::Local)
    }

    pub fn with_zone(pattern: impl Into<String>, zone: DateZone) -> Self {
        let pattern = pattern.into();
        let renderers = parse_with_zone(&pattern, zone);
        Self {
            pattern,
            zone,
            renderers,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn zone(&self) -> DateZone {
        self.zone
    }

    /// The compiled renderers in output order.
    pub fn renderers(&self) -> &[Renderer] {
        &self.renderers
    }

    pub fn format(&self, event: &LogEvent) -> String {
        let mut out = String::with_capacity(self.pattern.len() + event.message().len() + 32);
        let _ = self.format_to(&mut out, event);
        out
    }

    /// Render `event` into an existing writer.
    pub fn format_to<W: Write + ?Sized>(&self, out: &mut W, event: &LogEvent) -> fmt::Result {
        for renderer in &self.renderers {
            renderer.render_to(out, event)?;
        }
        Ok(())
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}
