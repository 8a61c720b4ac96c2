//! Field renderers, one variant per conversion character

use super::spec::FormatSpec;
use crate::core::LogEvent;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::{self, Write};

/// Date sub-pattern used when `%d` carries no `{...}` argument.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Time zone used to render `%d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateZone {
    #[default]
    Local,
    Utc,
}

/// Renderer for `%d`; the strftime sub-pattern is validated once here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRenderer {
    spec: FormatSpec,
    format: String,
    zone: DateZone,
}

impl DateRenderer {
    /// An empty or malformed sub-pattern falls back to [`DEFAULT_DATE_FORMAT`].
    pub fn new(spec: FormatSpec, zone: DateZone) -> Self {
        let format = match spec.param() {
            "" => DEFAULT_DATE_FORMAT,
            param if is_valid_strftime(param) => param,
            _ => DEFAULT_DATE_FORMAT,
        }
        .to_string();
        Self { spec, format, zone }
    }

    pub fn spec(&self) -> &FormatSpec {
        &self.spec
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn zone(&self) -> DateZone {
        self.zone
    }

    fn render(&self, timestamp_ms: u64) -> String {
        // Sub-second precision is dropped.
        let secs = i64::try_from(timestamp_ms / 1000).unwrap_or(i64::MAX);
        let mut out = String::new();
        match self.zone {
            DateZone::Utc => {
                if let Some(dt) = DateTime::<Utc>::from_timestamp(secs, 0) {
                    write_datetime(&mut out, &dt, &self.format);
                }
            }
            DateZone::Local => {
                if let Some(dt) = Local.timestamp_opt(secs, 0).single() {
                    write_datetime(&mut out, &dt, &self.format);
                }
            }
        }
        out
    }
}

fn is_valid_strftime(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

fn write_datetime<Tz>(out: &mut String, dt: &DateTime<Tz>, format: &str)
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    // Only fails for malformed formats, which were rejected at construction.
    let _ = write!(out, "{}", dt.format(format));
}

/// A unit that renders one field of the output line.
///
/// Every variant owns the `FormatSpec` it was built from. Literal text and line
/// breaks are written as-is; every other variant is passed through
/// [`FormatSpec::write_aligned`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderer {
    Literal(FormatSpec),
    Date(DateRenderer),
    Level(FormatSpec),
    LoggerName(FormatSpec),
    Message(FormatSpec),
    NewLine(FormatSpec),
    FileName(FormatSpec),
    LineNumber(FormatSpec),
    ThreadId(FormatSpec),
    FiberId(FormatSpec),
    ElapsedTime(FormatSpec),
    ThreadName(FormatSpec),
}

impl Renderer {
    /// Select the renderer for a parsed spec.
    ///
    /// An unrecognized conversion character becomes a literal holding the
    /// directive's `{...}` argument (empty when there is none).
    pub fn from_spec(spec: FormatSpec, zone: DateZone) -> Self {
        match spec.convert_type() {
            None => Renderer::Literal(spec),
            Some('d') => Renderer::Date(DateRenderer::new(spec, zone)),
            Some('p') => Renderer::Level(spec),
            Some('c') => Renderer::LoggerName(spec),
            Some('m') => Renderer::Message(spec),
            Some('n') => Renderer::NewLine(spec),
            Some('f') => Renderer::FileName(spec),
            Some('l') => Renderer::LineNumber(spec),
            Some('t') => Renderer::ThreadId(spec),
            Some('F') => Renderer::FiberId(spec),
            Some('r') => Renderer::ElapsedTime(spec),
            Some('N') => Renderer::ThreadName(spec),
            Some(_) => Renderer::Literal(FormatSpec::literal(spec.param())),
        }
    }

    pub fn spec(&self) -> &FormatSpec {
        match self {
            Renderer::Date(date) => date.spec(),
            Renderer::Literal(spec)
            | Renderer::Level(spec)
            | Renderer::LoggerName(spec)
            | Renderer::Message(spec)
            | Renderer::NewLine(spec)
            | Renderer::FileName(spec)
            | Renderer::LineNumber(spec)
            | Renderer::ThreadId(spec)
            | Renderer::FiberId(spec)
            | Renderer::ElapsedTime(spec)
            | Renderer::ThreadName(spec) => spec,
        }
    }

    pub fn render_to<W: Write + ?Sized>(&self, out: &mut W, event: &LogEvent) -> fmt::Result {
        match self {
            Renderer::Literal(spec) => out.write_str(spec.param()),
            Renderer::NewLine(_) => out.write_str(LINE_ENDING),
            Renderer::Date(date) => date.spec().write_aligned(out, &date.render(event.timestamp_ms())),
            Renderer::Level(spec) => spec.write_aligned(out, event.level().to_str()),
            Renderer::LoggerName(spec) => spec.write_aligned(out, event.logger_name()),
            Renderer::Message(spec) => spec.write_aligned(out, event.message()),
            Renderer::FileName(spec) => spec.write_aligned(out, event.file()),
            Renderer::ThreadName(spec) => spec.write_aligned(out, event.thread_name()),
            Renderer::LineNumber(spec) => spec.write_aligned(out, &event.line().to_string()),
            Renderer::ThreadId(spec) => spec.write_aligned(out, &event.thread_id().to_string()),
            Renderer::FiberId(spec) => spec.write_aligned(out, &event.fiber_id().to_string()),
            Renderer::ElapsedTime(spec) => {
                spec.write_aligned(out, &event.elapsed_ms().to_string())
            }
        }
    }

    pub fn render(&self, event: &LogEvent) -> String {
        let mut out = String::new();
        let _ = self.render_to(&mut out, event);
        out
    }
}
